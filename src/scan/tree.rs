//! Directory tree rendering for the report's structure section.
//!
//! Renders the included structure only: pruned directories are left out
//! entirely and files are shown only when they qualify as candidates and
//! survive the classifier. When the tree cannot be rendered, the caller
//! falls back to a flat indented listing of the candidate paths.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::PathClassifier;
use crate::domain::{CandidateFile, InclusionRules};
use crate::scan::walker::FileInventoryWalker;
use crate::utils::normalize_path;

pub fn render_tree(
    root: &Path,
    inclusion: &InclusionRules,
    classifier: &PathClassifier,
) -> Result<String> {
    let walker = FileInventoryWalker::new(root, inclusion);
    let mut lines =
        vec![format!("{}/", root.file_name().and_then(|n| n.to_str()).unwrap_or("."))];
    walk_tree(root, root, "", &walker, classifier, &mut lines)?;
    Ok(lines.join("\n"))
}

fn walk_tree(
    root: &Path,
    current: &Path,
    prefix: &str,
    walker: &FileInventoryWalker,
    classifier: &PathClassifier,
    lines: &mut Vec<String>,
) -> Result<()> {
    let at_root = current == root;
    let mut entries: Vec<(bool, String, PathBuf)> = fs::read_dir(current)?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let file_type = entry.file_type().ok()?;
            let name = entry.file_name().to_string_lossy().to_string();
            let path = entry.path();

            if file_type.is_dir() {
                if classifier.should_prune_dir(&name) {
                    return None;
                }
                return Some((true, name, path));
            }

            let relative = path
                .strip_prefix(root)
                .ok()
                .map(|p| normalize_path(&p.to_string_lossy()))
                .unwrap_or_else(|| name.clone());
            if !walker.matches_inclusion(&name) || classifier.should_exclude_file(&path, &relative)
            {
                return None;
            }
            Some((false, name, path))
        })
        .collect();

    // Directories first, then files, each alphabetically.
    entries.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    let total = entries.len();
    for (idx, (is_dir, name, path)) in entries.into_iter().enumerate() {
        let is_last = idx == total - 1;
        let connector = if is_last { "└── " } else { "├── " };

        if is_dir {
            // Root subdirectories outside the scan scope are shown but
            // never descended into.
            if at_root && !walker.scope_allows_root_dir(&name) {
                lines.push(format!("{}{}{}/ [...ignored]", prefix, connector, name));
                continue;
            }
            lines.push(format!("{}{}{}/", prefix, connector, name));
            let extension = if is_last { "    " } else { "│   " };
            walk_tree(root, &path, &format!("{}{}", prefix, extension), walker, classifier, lines)?;
        } else {
            lines.push(format!("{}{}{}", prefix, connector, name));
        }
    }

    Ok(())
}

/// Fallback structure view: indented candidate paths, capped at
/// `max_lines` to bound the output.
pub fn flat_listing(candidates: &[CandidateFile], max_lines: usize) -> String {
    let mut lines = Vec::new();
    for candidate in candidates.iter().take(max_lines) {
        let depth = candidate.relative_path.matches('/').count();
        lines.push(format!("{}- {}", "  ".repeat(depth), candidate.relative_path));
    }
    if candidates.len() > max_lines {
        lines.push(format!("… ({} more entries truncated)", candidates.len() - max_lines));
    }
    lines.join("\n")
}
