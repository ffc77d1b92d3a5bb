//! Report rendering: per-file blocks and whole-project assembly.

pub mod file_block;
pub mod report;

pub use file_block::{ContentSniffer, FileRenderer, PlaceholderReason, RenderedBlock, TextDetector};
pub use report::ReportAssembler;
