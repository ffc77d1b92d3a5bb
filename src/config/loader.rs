//! Config file loading.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw, partially specified configuration as read from a TOML file.
/// Anything left unset falls back to CLI values or built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub suffix: Option<String>,
    pub max_file_bytes: Option<u64>,
    #[serde(default)]
    pub include: IncludeSection,
    #[serde(default)]
    pub exclude: ExcludeSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncludeSection {
    /// Replaces the default extension list when non-empty.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Replaces the default configuration-filename list when non-empty.
    #[serde(default)]
    pub config_files: Vec<String>,
    /// Root subdirectories to scan deeply; empty means full recursion.
    #[serde(default)]
    pub target_subdirs: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExcludeSection {
    /// Extra file-name globs, appended after the built-in defaults.
    #[serde(default)]
    pub files: Vec<String>,
    /// Extra directory-name globs, appended after the built-in defaults.
    #[serde(default)]
    pub dirs: Vec<String>,
    /// Extra project-relative path substrings.
    #[serde(default)]
    pub paths: Vec<String>,
    /// Extra absolute path prefixes.
    #[serde(default)]
    pub abs_paths: Vec<String>,
}

pub fn load_config(config_path: Option<&Path>) -> Result<ConfigFile> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(),
    };

    let Some(config_file) = discovered else {
        return Ok(ConfigFile::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    match parse_toml_config(&content, &config_file) {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            if config_path_provided {
                return Err(e);
            }
            // Auto-discovered: warn and fall back to defaults.
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {}",
                config_file.display(),
                e
            );
            Ok(ConfigFile::default())
        }
    }
}

fn parse_toml_config(content: &str, config_file: &Path) -> Result<ConfigFile> {
    toml::from_str(content)
        .with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

fn discover_config() -> Option<PathBuf> {
    let candidates = ["project-digest.toml", ".project-digest.toml"];

    for candidate in candidates {
        let path = PathBuf::from(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
