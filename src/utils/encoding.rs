//! Text/binary detection and file reading with UTF-8 fallback logic.
//!
//! Binary detection is a best-effort heuristic: a null byte or a low
//! ratio of printable bytes in a sample prefix marks a file as binary.
//! Reading tries strict UTF-8 first and falls back to detected legacy
//! encodings, decoding with replacement characters.

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_SAMPLE_SIZE: usize = 8192;

/// Detect if a file is binary (not text).
///
/// Uses two heuristics over a sample prefix:
/// 1. null byte check (strong binary indicator)
/// 2. ratio of printable ASCII bytes (< 70% = likely binary)
///
/// I/O errors count as binary so an unreadable file is never rendered.
pub fn is_binary_file(path: &Path, sample_size: usize) -> bool {
    is_binary_file_impl(path, sample_size).unwrap_or(true)
}

fn is_binary_file_impl(path: &Path, sample_size: usize) -> Result<bool> {
    let mut file = File::open(path)?;
    let mut sample = vec![0u8; sample_size];
    let bytes_read = file.read(&mut sample)?;
    sample.truncate(bytes_read);

    if sample.is_empty() {
        return Ok(false);
    }

    if sample.contains(&0) {
        return Ok(true);
    }

    let printable_count = sample
        .iter()
        .filter(|&&b| (32..=126).contains(&b) || b == 9 || b == 10 || b == 13)
        .count();

    Ok((printable_count as f64 / sample.len() as f64) < 0.70)
}

/// Read a file as text.
///
/// Strategy:
/// 1. try strict UTF-8 (fast path for most source files)
/// 2. detect the encoding from a sample and decode with replacement
/// 3. last resort: UTF-8 with replacement characters
///
/// Returns the content and the encoding label that was used.
pub fn read_file_safe(path: &Path) -> Result<(String, String)> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    if let Ok(content) = std::str::from_utf8(&bytes) {
        return Ok((content.to_string(), "utf-8".to_string()));
    }

    let label = detect_encoding_from_sample(&bytes[..bytes.len().min(DEFAULT_SAMPLE_SIZE)]);
    if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
        let (decoded, _, _) = encoding.decode(&bytes);
        return Ok((decoded.into_owned(), encoding.name().to_lowercase()));
    }

    let (decoded, _, _) = UTF_8.decode(&bytes);
    Ok((decoded.into_owned(), "utf-8".to_string()))
}

fn detect_encoding_from_sample(sample: &[u8]) -> String {
    // BOM markers are the most reliable signal.
    if sample.starts_with(&[0xef, 0xbb, 0xbf]) {
        return "utf-8".to_string();
    }
    if sample.starts_with(&[0xff, 0xfe]) {
        return "utf-16le".to_string();
    }
    if sample.starts_with(&[0xfe, 0xff]) {
        return "utf-16be".to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, true);
    detector.guess(None, true).name().to_lowercase()
}
