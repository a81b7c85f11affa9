//! Error types for definition emission.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for emission operations.
///
/// Emission errors are ordinary recoverable results to the caller; unlike
/// build errors they never poison the resolved model.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Emission was requested with zero resolved records.
    #[error("no records to emit, resolve a root type first")]
    EmptyOutput,

    /// The output file exists and overwrite was not requested.
    #[error("output file exists: {path}")]
    OutputExists {
        /// Path of the existing file.
        path: PathBuf,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
