//! Core data model shared across the scanning pipeline.

use std::path::PathBuf;

use crate::config::defaults;

/// One project to digest: a root directory plus where its report goes.
///
/// Constructed once per top-level subdirectory of the input directory (or
/// for the input directory itself when it has no subdirectories) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    pub root: PathBuf,
    pub name: String,
    pub output_path: PathBuf,
}

/// A file the walker has accepted as a candidate for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path relative to the project root, `/`-separated.
    pub relative_path: String,
}

/// The layered exclusion policy: four ordered pattern lists with different
/// matching semantics.
///
/// The lists are kept separate rather than collapsed into one generic
/// ignore list because they match differently: globs against the base
/// name, globs against directory segments, substrings against the
/// project-relative path, and plain prefixes against the absolute path.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    /// Glob patterns matched against a file's base name.
    pub file_names: Vec<String>,
    /// Glob patterns matched against a directory's base name; a matching
    /// directory is pruned before any of its contents are enumerated.
    pub dir_names: Vec<String>,
    /// Substrings matched against the project-relative path.
    pub relative_paths: Vec<String>,
    /// Plain string prefixes matched against the absolute path.
    pub absolute_prefixes: Vec<String>,
}

impl ExclusionRules {
    /// Built-in defaults followed by caller-supplied extras. Defaults come
    /// first; beyond that the order is irrelevant since all rules are OR'ed.
    pub fn with_extras(
        extra_files: &[String],
        extra_dirs: &[String],
        extra_paths: &[String],
        extra_abs_prefixes: &[String],
    ) -> Self {
        let mut rules = Self::default_rules();
        rules.file_names.extend(extra_files.iter().cloned());
        rules.dir_names.extend(extra_dirs.iter().cloned());
        rules.relative_paths.extend(extra_paths.iter().cloned());
        rules.absolute_prefixes.extend(extra_abs_prefixes.iter().cloned());
        rules
    }

    pub fn default_rules() -> Self {
        Self {
            file_names: defaults::excluded_file_patterns(),
            dir_names: defaults::excluded_dir_patterns(),
            relative_paths: Vec::new(),
            absolute_prefixes: Vec::new(),
        }
    }
}

/// Which files qualify as candidates: accepted extensions plus well-known
/// configuration filenames (exact names or globs such as `*.cmake`).
///
/// A file qualifies when it matches ANY extension or ANY configuration
/// filename pattern. Extension matching is case-sensitive against dotted
/// suffixes of the name, longest first, so compound extensions such as
/// `.config.js` are accepted.
#[derive(Debug, Clone)]
pub struct InclusionRules {
    /// Accepted extensions including the leading dot, e.g. `.py`.
    pub extensions: Vec<String>,
    /// Exact or glob configuration filenames, e.g. `package.json`, `*.cmake`.
    pub config_files: Vec<String>,
    /// Root subdirectories to scan deeply. Empty means full recursion;
    /// when non-empty, root-level files still qualify but other root
    /// subdirectories are left out and marked ignored in the structure.
    pub target_subdirs: Vec<String>,
}

impl Default for InclusionRules {
    fn default() -> Self {
        Self {
            extensions: defaults::included_extensions(),
            config_files: defaults::included_config_files(),
            target_subdirs: Vec::new(),
        }
    }
}

/// Per-project accumulator, owned by the report assembler for the duration
/// of one project's pass and returned to the caller for display.
///
/// Skip counters are kept per category so the final summary can tell
/// rule-excluded files apart from oversized/binary/unreadable placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Files whose content made it into the report.
    pub files_included: u64,
    /// Candidates rejected by the path classifier.
    pub files_skipped_rule: u64,
    /// Candidates represented as oversized placeholders.
    pub files_skipped_oversized: u64,
    /// Candidates represented as binary placeholders.
    pub files_skipped_binary: u64,
    /// Candidates that could not be read (vanished, permission denied).
    pub files_skipped_unreadable: u64,
    /// Total bytes of rendered content.
    pub total_bytes_included: u64,
}

impl ScanStats {
    /// Aggregate skip count across all categories.
    pub fn files_skipped(&self) -> u64 {
        self.files_skipped_rule
            + self.files_skipped_oversized
            + self.files_skipped_binary
            + self.files_skipped_unreadable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extras_are_appended_after_defaults() {
        let rules = ExclusionRules::with_extras(
            &["*.bak".to_string()],
            &["coverage".to_string()],
            &["vendor/cache".to_string()],
            &["/opt/secrets".to_string()],
        );

        let defaults = ExclusionRules::default_rules();
        assert_eq!(&rules.file_names[..defaults.file_names.len()], &defaults.file_names[..]);
        assert_eq!(rules.file_names.last().map(String::as_str), Some("*.bak"));
        assert_eq!(rules.dir_names.last().map(String::as_str), Some("coverage"));
        assert_eq!(rules.relative_paths, vec!["vendor/cache".to_string()]);
        assert_eq!(rules.absolute_prefixes, vec!["/opt/secrets".to_string()]);
    }

    #[test]
    fn files_skipped_sums_all_categories() {
        let stats = ScanStats {
            files_included: 3,
            files_skipped_rule: 1,
            files_skipped_oversized: 2,
            files_skipped_binary: 4,
            files_skipped_unreadable: 8,
            total_bytes_included: 100,
        };
        assert_eq!(stats.files_skipped(), 15);
    }
}
