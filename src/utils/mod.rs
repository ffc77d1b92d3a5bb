//! Shared helpers: encoding detection, path normalization, formatting.

pub mod bytes;
pub mod encoding;
pub mod paths;

pub use bytes::{format_size, format_with_commas};
pub use encoding::{is_binary_file, read_file_safe, DEFAULT_SAMPLE_SIZE};
pub use paths::normalize_path;
