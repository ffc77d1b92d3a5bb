//! Rendering one accepted file into a content or placeholder block.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::utils::{is_binary_file, read_file_safe, DEFAULT_SAMPLE_SIZE};

/// Why a file's content was replaced with a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderReason {
    /// Larger than the configured threshold; content was never read.
    Oversized,
    /// Content sniffing classified the file as binary.
    Binary,
    /// The file vanished or could not be read. Shown like a binary
    /// placeholder but logged separately for diagnostics.
    Unreadable,
}

impl PlaceholderReason {
    pub fn note(&self) -> &'static str {
        match self {
            PlaceholderReason::Oversized => "oversized file",
            PlaceholderReason::Binary => "binary file",
            PlaceholderReason::Unreadable => "unreadable file",
        }
    }
}

/// The rendered outcome for one candidate file, appended once to the
/// report body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    Content { lines: Vec<String>, size_bytes: u64 },
    Placeholder { reason: PlaceholderReason, size_bytes: u64 },
}

impl RenderedBlock {
    pub fn size_bytes(&self) -> u64 {
        match self {
            RenderedBlock::Content { size_bytes, .. }
            | RenderedBlock::Placeholder { size_bytes, .. } => *size_bytes,
        }
    }
}

/// Text-vs-binary classification, pluggable so the sniffing heuristic can
/// be swapped without touching the renderer.
pub trait TextDetector {
    fn is_textual(&self, path: &Path) -> bool;
}

/// Default detector: null-byte and printable-ratio sniffing over a sample
/// prefix.
#[derive(Debug, Clone)]
pub struct ContentSniffer {
    sample_size: usize,
}

impl Default for ContentSniffer {
    fn default() -> Self {
        Self { sample_size: DEFAULT_SAMPLE_SIZE }
    }
}

impl TextDetector for ContentSniffer {
    fn is_textual(&self, path: &Path) -> bool {
        !is_binary_file(path, self.sample_size)
    }
}

/// Renders accepted files, downgrading every per-file failure to a
/// placeholder so the caller never has to abort.
pub struct FileRenderer {
    max_file_bytes: u64,
    detector: Box<dyn TextDetector>,
}

impl FileRenderer {
    pub fn new(max_file_bytes: u64) -> Self {
        Self { max_file_bytes, detector: Box::new(ContentSniffer::default()) }
    }

    pub fn with_detector(max_file_bytes: u64, detector: Box<dyn TextDetector>) -> Self {
        Self { max_file_bytes, detector }
    }

    /// Decide what one file contributes to the report:
    ///
    /// 1. size measurement failure -> unreadable placeholder;
    /// 2. size above the threshold -> oversized placeholder, content never
    ///    read (a file of exactly the threshold size is still rendered);
    /// 3. binary sniff -> binary placeholder;
    /// 4. otherwise read, strip carriage returns, split into lines.
    ///
    /// An empty text file renders as content with zero lines.
    pub fn render(&self, path: &Path) -> RenderedBlock {
        let size_bytes = match fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                warn!("could not stat {}: {}", path.display(), err);
                return RenderedBlock::Placeholder {
                    reason: PlaceholderReason::Unreadable,
                    size_bytes: 0,
                };
            }
        };

        if size_bytes > self.max_file_bytes {
            debug!("skipping oversized file {} ({} bytes)", path.display(), size_bytes);
            return RenderedBlock::Placeholder {
                reason: PlaceholderReason::Oversized,
                size_bytes,
            };
        }

        if !self.detector.is_textual(path) {
            debug!("skipping binary file {}", path.display());
            return RenderedBlock::Placeholder { reason: PlaceholderReason::Binary, size_bytes };
        }

        match read_file_safe(path) {
            Ok((content, _encoding)) => {
                RenderedBlock::Content { lines: split_lines(&content), size_bytes }
            }
            Err(err) => {
                warn!("could not read {}: {:#}", path.display(), err);
                RenderedBlock::Placeholder {
                    reason: PlaceholderReason::Unreadable,
                    size_bytes,
                }
            }
        }
    }
}

/// Strip carriage returns and split into lines; a trailing newline does
/// not produce an extra empty line.
fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    let normalized = content.replace('\r', "");
    normalized.lines().map(str::to_string).collect()
}
