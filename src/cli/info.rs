//! Info command implementation: a dry run that writes nothing.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::parse_csv;
use crate::classify::PathClassifier;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::error::DigestError;
use crate::render::{FileRenderer, RenderedBlock};
use crate::scan::tree::render_tree;
use crate::scan::{discover_projects, FileInventoryWalker};

#[derive(Args)]
pub struct InfoArgs {
    /// Directory whose subdirectories are the projects to inspect
    #[arg(short, long, value_name = "DIR", env = "DIGEST_INPUT_DIR")]
    pub input: Option<PathBuf>,

    /// Path to config file (project-digest.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Include only these extensions (comma-separated, e.g. '.py,.ts')
    #[arg(long, value_name = "EXTS")]
    pub include_ext: Option<String>,

    /// Deep-scan only these root subdirectories (comma-separated)
    #[arg(long, value_name = "DIRS", env = "DIGEST_TARGET_SUBDIRS")]
    pub target_subdir: Option<String>,

    /// Extra file-name globs to exclude (comma-separated)
    #[arg(long, value_name = "GLOBS")]
    pub exclude_file: Option<String>,

    /// Extra directory-name globs to prune (comma-separated)
    #[arg(long, value_name = "GLOBS")]
    pub exclude_dir: Option<String>,

    /// Render files up to this size; larger ones become placeholders
    #[arg(long, value_name = "BYTES")]
    pub max_file_bytes: Option<u64>,

    /// Print the directory tree for each project
    #[arg(long)]
    pub tree: bool,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let file_config = load_config(args.config.as_deref())?;
    let overrides = CliOverrides {
        input_dir: args.input,
        max_file_bytes: args.max_file_bytes,
        include_extensions: parse_csv(&args.include_ext),
        target_subdirs: parse_csv(&args.target_subdir),
        exclude_files: parse_csv(&args.exclude_file).unwrap_or_default(),
        exclude_dirs: parse_csv(&args.exclude_dir).unwrap_or_default(),
        ..CliOverrides::default()
    };
    let config = merge_cli_with_config(&file_config, overrides);

    if !config.input_dir.exists() {
        return Err(DigestError::InputDirMissing(config.input_dir).into());
    }

    let targets = discover_projects(&config.input_dir, &config.output_dir, &config.suffix)?;
    let classifier = PathClassifier::new(&config.exclusion);
    let renderer = FileRenderer::new(config.max_file_bytes);

    for target in &targets {
        let walker = FileInventoryWalker::new(&target.root, &config.inclusion);
        let candidates = walker.list(&classifier);

        let mut excluded = 0usize;
        let mut placeholders = 0usize;
        let mut rendered = 0usize;
        for candidate in &candidates {
            if classifier.should_exclude_file(&candidate.path, &candidate.relative_path) {
                excluded += 1;
                continue;
            }
            match renderer.render(&candidate.path) {
                RenderedBlock::Content { .. } => rendered += 1,
                RenderedBlock::Placeholder { .. } => placeholders += 1,
            }
        }

        println!("Project: {}", target.name);
        println!("  Candidates: {}", candidates.len());
        println!("  Would render: {}", rendered);
        println!("  Excluded by rule: {}", excluded);
        println!("  Placeholders (oversized/binary/unreadable): {}", placeholders);
        println!("  Would write: {}", target.output_path.display());

        if args.tree {
            match render_tree(&target.root, &config.inclusion, &classifier) {
                Ok(tree) => println!("\n{}\n", tree),
                Err(err) => println!("  (tree unavailable: {})", err),
            }
        }
    }

    Ok(())
}
