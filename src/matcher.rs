//! Glob-style pattern matching for exclusion and inclusion lists.
//!
//! Patterns support `*` and `?` with standard glob semantics and are
//! matched case-sensitively. A pattern that fails to compile degrades to a
//! literal string comparison rather than matching everything, so a typo in
//! a configured pattern can never silently admit unwanted files.

use globset::{GlobBuilder, GlobMatcher};

/// One compiled pattern.
#[derive(Debug, Clone)]
pub enum Pattern {
    Glob(GlobMatcher),
    /// Fallback for patterns globset rejects (e.g. an unclosed brace).
    Literal(String),
}

impl Pattern {
    /// Compile `raw` after trimming surrounding whitespace.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        match GlobBuilder::new(trimmed).build() {
            Ok(glob) => Pattern::Glob(glob.compile_matcher()),
            Err(_) => Pattern::Literal(trimmed.to_string()),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Glob(matcher) => matcher.is_match(name),
            Pattern::Literal(literal) => literal == name,
        }
    }
}

/// An ordered list of patterns, OR'ed together.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new<I, S>(raw_patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: raw_patterns.into_iter().map(|raw| Pattern::new(raw.as_ref())).collect(),
        }
    }

    /// An empty set never matches.
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_matches_any_run() {
        let set = PatternSet::new(["*.lock"]);
        assert!(set.matches("Cargo.lock"));
        assert!(set.matches(".lock"));
        assert!(!set.matches("lockfile"));
    }

    #[test]
    fn question_mark_matches_single_char() {
        let set = PatternSet::new(["v?.json"]);
        assert!(set.matches("v1.json"));
        assert!(!set.matches("v12.json"));
        assert!(!set.matches("v.json"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let set = PatternSet::new(["README.md"]);
        assert!(set.matches("README.md"));
        assert!(!set.matches("readme.md"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let set = PatternSet::new(["  *.env  "]);
        assert!(set.matches("prod.env"));
    }

    #[test]
    fn empty_set_never_matches() {
        let set = PatternSet::new(Vec::<String>::new());
        assert!(!set.matches("anything"));
        assert!(set.is_empty());
    }

    #[test]
    fn malformed_pattern_degrades_to_literal() {
        // An unclosed alternation is not a valid glob; it must only match
        // a file literally named like the pattern, never everything.
        let set = PatternSet::new(["{oops"]);
        assert!(!set.matches("main.rs"));
        assert!(set.matches("{oops"));
    }
}
