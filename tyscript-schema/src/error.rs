//! Error types for graph resolution.

use thiserror::Error;
use tyscript_core::ValueEncodeError;

/// Error type for build-time resolution failures.
///
/// All variants are fatal to the build: a naming or registry invariant
/// violation would poison every subsequently generated record, so the
/// first failure aborts with full context instead of continuing.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A submitted root type, after one pointer indirection, is not a
    /// record.
    #[error("root type '{origin}' is not a record (kind: {kind})")]
    UnsupportedRoot {
        /// Qualified name of the offending type.
        origin: String,
        /// Kind that was found instead.
        kind: &'static str,
    },

    /// Name disambiguation exceeded its attempt bound.
    #[error("cannot find a suitable record name for '{origin}': candidate '{candidate}'")]
    NamingExhausted {
        /// Qualified name of the offending type.
        origin: String,
        /// Base candidate that could not be disambiguated.
        candidate: String,
    },

    /// An enum element value could not be converted to canonical literal
    /// text.
    #[error("cannot encode value for element '{element}' of enum '{origin}': {source}")]
    ValueEncoding {
        /// Qualified name of the enum's underlying type.
        origin: String,
        /// Element whose value failed to encode.
        element: String,
        /// Underlying encoding error.
        #[source]
        source: ValueEncodeError,
    },
}

/// Result type alias for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
