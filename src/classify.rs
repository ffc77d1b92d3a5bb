//! Path classification against the layered exclusion policy.

use std::path::Path;

use crate::domain::ExclusionRules;
use crate::matcher::PatternSet;

/// Hidden noise files excluded unconditionally, independent of any
/// caller-supplied configuration.
const NOISE_FILE_NAMES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Combines base-name matching, directory-segment matching, and path
/// containment checks into a single include/exclude verdict per file.
#[derive(Debug, Clone)]
pub struct PathClassifier {
    file_names: PatternSet,
    dir_names: PatternSet,
    relative_paths: Vec<String>,
    absolute_prefixes: Vec<String>,
}

impl PathClassifier {
    pub fn new(rules: &ExclusionRules) -> Self {
        Self {
            file_names: PatternSet::new(&rules.file_names),
            dir_names: PatternSet::new(&rules.dir_names),
            relative_paths: rules
                .relative_paths
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            absolute_prefixes: rules
                .absolute_prefixes
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Decide whether a candidate file is excluded. First match wins:
    ///
    /// 1. base name is an unconditional noise marker;
    /// 2. base name matches a file-name pattern;
    /// 3. absolute path starts with a configured prefix (plain string
    ///    prefix, not a glob);
    /// 4. project-relative path contains a configured substring.
    pub fn should_exclude_file(&self, path: &Path, relative_path: &str) -> bool {
        let base_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        if NOISE_FILE_NAMES.contains(&base_name) {
            return true;
        }
        if self.file_names.matches(base_name) {
            return true;
        }

        let absolute = path.to_string_lossy();
        if self.absolute_prefixes.iter().any(|prefix| absolute.starts_with(prefix.as_str())) {
            return true;
        }

        self.relative_paths.iter().any(|needle| relative_path.contains(needle.as_str()))
    }

    /// Directory pruning check, applied during traversal before any file
    /// under the directory is enumerated. Applies only to directories;
    /// rules 1-4 above apply only to files.
    pub fn should_prune_dir(&self, name: &str) -> bool {
        self.dir_names.matches(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn classifier(rules: ExclusionRules) -> PathClassifier {
        PathClassifier::new(&rules)
    }

    fn empty_rules() -> ExclusionRules {
        ExclusionRules::default()
    }

    #[test]
    fn noise_files_are_excluded_unconditionally() {
        let c = classifier(empty_rules());
        assert!(c.should_exclude_file(&PathBuf::from("/p/.DS_Store"), ".DS_Store"));
        assert!(c.should_exclude_file(&PathBuf::from("/p/img/Thumbs.db"), "img/Thumbs.db"));
        assert!(!c.should_exclude_file(&PathBuf::from("/p/main.py"), "main.py"));
    }

    #[test]
    fn file_name_globs_match_base_name_only() {
        let mut rules = empty_rules();
        rules.file_names.push("*.env".to_string());
        rules.file_names.push(".env*".to_string());
        let c = classifier(rules);

        assert!(c.should_exclude_file(&PathBuf::from("/p/.env"), ".env"));
        assert!(c.should_exclude_file(&PathBuf::from("/p/cfg/.env.local"), "cfg/.env.local"));
        assert!(!c.should_exclude_file(&PathBuf::from("/p/environment.py"), "environment.py"));
    }

    #[test]
    fn absolute_prefix_is_plain_string_match() {
        let mut rules = empty_rules();
        rules.absolute_prefixes.push("/srv/private".to_string());
        let c = classifier(rules);

        assert!(c.should_exclude_file(&PathBuf::from("/srv/private/app/a.py"), "app/a.py"));
        assert!(!c.should_exclude_file(&PathBuf::from("/srv/public/app/a.py"), "app/a.py"));
    }

    #[test]
    fn relative_substring_distinguishes_sibling_dirs() {
        let mut rules = empty_rules();
        rules.relative_paths.push("vendor/cache".to_string());
        let c = classifier(rules);

        assert!(c.should_exclude_file(
            &PathBuf::from("/p/src/vendor/cache/lib.c"),
            "src/vendor/cache/lib.c"
        ));
        assert!(!c.should_exclude_file(
            &PathBuf::from("/p/src/vendor/other/lib.c"),
            "src/vendor/other/lib.c"
        ));
    }

    #[test]
    fn dir_pruning_is_independent_of_file_rules() {
        let mut rules = empty_rules();
        rules.dir_names.push("node_modules".to_string());
        let c = classifier(rules);

        assert!(c.should_prune_dir("node_modules"));
        assert!(!c.should_prune_dir("src"));
        // The dir list never applies to files.
        assert!(!c.should_exclude_file(&PathBuf::from("/p/node_modules"), "node_modules"));
    }

    #[test]
    fn blank_configured_entries_are_ignored() {
        let mut rules = empty_rules();
        rules.relative_paths.push("   ".to_string());
        rules.absolute_prefixes.push(String::new());
        let c = classifier(rules);

        assert!(!c.should_exclude_file(&PathBuf::from("/p/a.py"), "a.py"));
    }
}
