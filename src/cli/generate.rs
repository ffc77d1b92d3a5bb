//! Generate command implementation.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::error;

use super::utils::parse_csv;
use crate::classify::PathClassifier;
use crate::config::{load_config, merge_cli_with_config, CliOverrides, ScanConfig};
use crate::error::DigestError;
use crate::render::{FileRenderer, ReportAssembler};
use crate::scan::discover_projects;
use crate::utils::format_with_commas;

#[derive(Args)]
pub struct GenerateArgs {
    /// Directory whose subdirectories are the projects to digest
    #[arg(short, long, value_name = "DIR", env = "DIGEST_INPUT_DIR")]
    pub input: Option<PathBuf>,

    /// Directory for the generated report files
    #[arg(short, long, value_name = "DIR", env = "DIGEST_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Report filename suffix appended to each project name
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Render files up to this size; larger ones become placeholders
    #[arg(long, value_name = "BYTES")]
    pub max_file_bytes: Option<u64>,

    /// Path to config file (project-digest.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Include only these extensions (comma-separated, e.g. '.py,.ts')
    #[arg(long, value_name = "EXTS")]
    pub include_ext: Option<String>,

    /// Include these configuration filenames (comma-separated globs)
    #[arg(long, value_name = "GLOBS")]
    pub include_config_file: Option<String>,

    /// Deep-scan only these root subdirectories (comma-separated); other
    /// root subdirectories appear in the structure as ignored
    #[arg(long, value_name = "DIRS", env = "DIGEST_TARGET_SUBDIRS")]
    pub target_subdir: Option<String>,

    /// Extra file-name globs to exclude (comma-separated)
    #[arg(long, value_name = "GLOBS")]
    pub exclude_file: Option<String>,

    /// Extra directory-name globs to prune (comma-separated)
    #[arg(long, value_name = "GLOBS")]
    pub exclude_dir: Option<String>,

    /// Exclude files whose relative path contains these substrings
    #[arg(long, value_name = "SUBSTRINGS")]
    pub exclude_path: Option<String>,

    /// Exclude files whose absolute path starts with these prefixes
    #[arg(long, value_name = "PREFIXES")]
    pub exclude_abs_path: Option<String>,

    /// Omit the generation timestamp for reproducible reports
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let file_config = load_config(args.config.as_deref())?;
    let overrides = CliOverrides {
        input_dir: args.input,
        output_dir: args.output,
        suffix: args.suffix,
        max_file_bytes: args.max_file_bytes,
        include_extensions: parse_csv(&args.include_ext),
        include_config_files: parse_csv(&args.include_config_file),
        target_subdirs: parse_csv(&args.target_subdir),
        exclude_files: parse_csv(&args.exclude_file).unwrap_or_default(),
        exclude_dirs: parse_csv(&args.exclude_dir).unwrap_or_default(),
        exclude_paths: parse_csv(&args.exclude_path).unwrap_or_default(),
        exclude_abs_paths: parse_csv(&args.exclude_abs_path).unwrap_or_default(),
    };
    let config = merge_cli_with_config(&file_config, overrides);

    if !config.input_dir.exists() {
        if config.input_dir_explicit {
            return Err(DigestError::InputDirMissing(config.input_dir).into());
        }
        // Default input dir: create it and leave the user a starting point.
        fs::create_dir_all(&config.input_dir).with_context(|| {
            format!("Failed to create input directory: {}", config.input_dir.display())
        })?;
        println!(
            "Nothing to scan yet: created {}. Add project directories there and rerun.",
            config.input_dir.display()
        );
        return Ok(());
    }

    fs::create_dir_all(&config.output_dir).map_err(|source| DigestError::OutputDirUnavailable {
        path: config.output_dir.clone(),
        source,
    })?;

    generate_reports(&config, !args.no_timestamp)
}

fn generate_reports(config: &ScanConfig, include_timestamp: bool) -> Result<()> {
    let targets = discover_projects(&config.input_dir, &config.output_dir, &config.suffix)?;

    let classifier = PathClassifier::new(&config.exclusion);
    let renderer = FileRenderer::new(config.max_file_bytes);
    let assembler =
        ReportAssembler::new(&config.inclusion, &classifier, &renderer, include_timestamp);

    let mut generated = 0usize;
    for target in &targets {
        println!("[Project: {}]", target.name);
        match assembler.generate(target) {
            Ok(stats) => {
                generated += 1;
                println!("  Files included: {}", stats.files_included);
                println!("  Files skipped (rule): {}", stats.files_skipped_rule);
                println!("  Files skipped (oversized): {}", stats.files_skipped_oversized);
                println!("  Files skipped (binary): {}", stats.files_skipped_binary);
                println!("  Files skipped (unreadable): {}", stats.files_skipped_unreadable);
                println!(
                    "  Total bytes included: {}",
                    format_with_commas(stats.total_bytes_included)
                );
                println!("  Report: {}", target.output_path.display());
            }
            Err(err) => {
                // One broken project must not stop the rest of the run.
                error!("failed to digest {}: {:#}", target.name, err);
            }
        }
        println!();
    }

    println!("Processed {}/{} projects", generated, targets.len());
    println!("Output files in: {}", config.output_dir.display());
    Ok(())
}
