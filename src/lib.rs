//! project-digest: plain-text digests of project source trees
//!
//! Walks one or more project directories, selects the files relevant to a
//! source-code review, excludes noise through a layered pattern policy,
//! and writes one report per project with a directory tree, per-file
//! metadata, and line-numbered file contents.

pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod matcher;
pub mod render;
pub mod scan;
pub mod utils;
