//! Fatal error taxonomy.
//!
//! Per-file failures are never fatal: the renderer downgrades them to
//! placeholders and the assembler keeps going. Only configuration problems
//! abort the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    /// An explicitly configured input directory is missing. The default
    /// input directory is created instead of raising this.
    #[error("input directory does not exist: {0}")]
    InputDirMissing(PathBuf),

    #[error("could not create output directory {path}")]
    OutputDirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
