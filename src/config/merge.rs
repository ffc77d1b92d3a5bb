//! Merging CLI arguments with config file values and built-in defaults.
//!
//! Precedence: CLI > config file > defaults. The result is one immutable
//! `ScanConfig` passed into every component; nothing downstream reads
//! configuration from anywhere else.

use std::path::PathBuf;

use crate::config::defaults;
use crate::config::loader::ConfigFile;
use crate::domain::{ExclusionRules, InclusionRules};

/// Values the CLI layer may override.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub suffix: Option<String>,
    pub max_file_bytes: Option<u64>,
    pub include_extensions: Option<Vec<String>>,
    pub include_config_files: Option<Vec<String>>,
    pub target_subdirs: Option<Vec<String>>,
    pub exclude_files: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub exclude_paths: Vec<String>,
    pub exclude_abs_paths: Vec<String>,
}

/// Fully resolved, immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub suffix: String,
    pub max_file_bytes: u64,
    pub inclusion: InclusionRules,
    pub exclusion: ExclusionRules,
    /// Whether the input directory came from the CLI or config file rather
    /// than the built-in default. A missing explicit directory is fatal; a
    /// missing default directory is created.
    pub input_dir_explicit: bool,
}

pub fn merge_cli_with_config(file: &ConfigFile, cli: CliOverrides) -> ScanConfig {
    let input_dir_explicit = cli.input_dir.is_some() || file.input_dir.is_some();

    let input_dir = cli
        .input_dir
        .or_else(|| file.input_dir.clone())
        .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_INPUT_DIR));
    let output_dir = cli
        .output_dir
        .or_else(|| file.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_OUTPUT_DIR));
    let suffix = cli
        .suffix
        .or_else(|| file.suffix.clone())
        .unwrap_or_else(|| defaults::DEFAULT_SUFFIX.to_string());
    let max_file_bytes =
        cli.max_file_bytes.or(file.max_file_bytes).unwrap_or(defaults::DEFAULT_MAX_FILE_BYTES);

    // Inclusion lists replace the defaults when supplied; exclusion lists
    // always extend them (defaults first).
    let mut inclusion = InclusionRules::default();
    if let Some(extensions) = cli.include_extensions {
        inclusion.extensions = extensions;
    } else if !file.include.extensions.is_empty() {
        inclusion.extensions = file.include.extensions.clone();
    }
    if let Some(config_files) = cli.include_config_files {
        inclusion.config_files = config_files;
    } else if !file.include.config_files.is_empty() {
        inclusion.config_files = file.include.config_files.clone();
    }
    if let Some(target_subdirs) = cli.target_subdirs {
        inclusion.target_subdirs = target_subdirs;
    } else if !file.include.target_subdirs.is_empty() {
        inclusion.target_subdirs = file.include.target_subdirs.clone();
    }

    let mut extra_files = file.exclude.files.clone();
    extra_files.extend(cli.exclude_files);
    let mut extra_dirs = file.exclude.dirs.clone();
    extra_dirs.extend(cli.exclude_dirs);
    let mut extra_paths = file.exclude.paths.clone();
    extra_paths.extend(cli.exclude_paths);
    let mut extra_abs = file.exclude.abs_paths.clone();
    extra_abs.extend(cli.exclude_abs_paths);

    let exclusion = ExclusionRules::with_extras(&extra_files, &extra_dirs, &extra_paths, &extra_abs);

    ScanConfig {
        input_dir,
        output_dir,
        suffix,
        max_file_bytes,
        inclusion,
        exclusion,
        input_dir_explicit,
    }
}
