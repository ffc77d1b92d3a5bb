//! File inventory traversal with directory pruning.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::classify::PathClassifier;
use crate::domain::{CandidateFile, InclusionRules};
use crate::matcher::PatternSet;
use crate::utils::normalize_path;

/// Walks one project root and yields the candidate files matching the
/// inclusion rules, with excluded directories pruned before descent.
///
/// The walker is a pure traversal: re-invoking it on an unchanged tree
/// yields an identical sequence.
#[derive(Debug, Clone)]
pub struct FileInventoryWalker {
    root: PathBuf,
    extensions: Vec<String>,
    config_files: PatternSet,
    target_subdirs: Vec<String>,
}

impl FileInventoryWalker {
    pub fn new<P: Into<PathBuf>>(root: P, inclusion: &InclusionRules) -> Self {
        Self {
            root: root.into(),
            extensions: inclusion.extensions.iter().map(|e| e.trim().to_string()).collect(),
            config_files: PatternSet::new(&inclusion.config_files),
            target_subdirs: inclusion
                .target_subdirs
                .iter()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    /// Candidate files in byte-wise lexicographic order by full path.
    ///
    /// Directories matching the classifier's pruning rule are never
    /// entered, so none of their descendants can appear. An empty result
    /// is not an error. Symlinks are not followed into directories; a
    /// symlink to a file survives here and is resolved by the renderer.
    pub fn list(&self, classifier: &PathClassifier) -> Vec<CandidateFile> {
        let mut candidates = Vec::new();

        let walker = WalkDir::new(&self.root).follow_links(false).into_iter().filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            if classifier.should_prune_dir(&name) {
                return false;
            }
            // With a scan scope, only the named root subdirectories are
            // entered; root-level files are unaffected.
            if e.depth() == 1 {
                return self.scope_allows_root_dir(&name);
            }
            true
        });

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    debug!("skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }
            // A symlink pointing at a directory is not a file candidate;
            // a broken one survives and becomes an unreadable placeholder.
            if entry.path_is_symlink() && entry.path().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.matches_inclusion(&name) {
                continue;
            }

            let relative_path = match entry.path().strip_prefix(&self.root) {
                Ok(rel) => normalize_path(&rel.to_string_lossy()),
                Err(_) => continue,
            };

            candidates.push(CandidateFile { path: entry.into_path(), relative_path });
        }

        candidates.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
        candidates
    }

    /// Whether the scan scope admits a root-level subdirectory. An empty
    /// scope admits everything.
    pub fn scope_allows_root_dir(&self, name: &str) -> bool {
        self.target_subdirs.is_empty() || self.target_subdirs.iter().any(|d| d == name)
    }

    /// A file qualifies by extension (case-sensitive dotted suffix, checked
    /// longest-first so compound extensions like `.config.js` match) or by
    /// matching a configuration filename pattern.
    pub fn matches_inclusion(&self, name: &str) -> bool {
        for (idx, _) in name.match_indices('.') {
            let suffix = &name[idx..];
            if self.extensions.iter().any(|ext| ext == suffix) {
                return true;
            }
        }
        self.config_files.matches(name)
    }
}

/// Convenience wrapper for one-off listings.
pub fn list_candidates(
    root: &Path,
    inclusion: &InclusionRules,
    classifier: &PathClassifier,
) -> Vec<CandidateFile> {
    FileInventoryWalker::new(root, inclusion).list(classifier)
}
