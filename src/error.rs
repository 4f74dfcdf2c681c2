//! Defines [`GeoPathError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Geometry conversion itself never fails: invalid or unsupported input degrades to fewer output
/// geometries. These errors come from the surfaces around it, such as decoding raw command codes,
/// parsing options, or rebuilding `geo` geometries from a vertex stream.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoPathError {
    /// Incorrect type was passed to an operation.
    #[error("Incorrect type passed to operation: {0}")]
    IncorrectType(Cow<'static, str>),

    /// A raw path command or geometry kind code that has no known meaning.
    #[error("Unknown {kind} code: {code}")]
    UnknownCode {
        /// What the code was supposed to identify.
        kind: &'static str,
        /// The offending value.
        code: u8,
    },

    /// A vertex stream that violates the path structure.
    #[error("Malformed path: {0}")]
    MalformedPath(String),

    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// Whenever a count does not fit into the target integer type.
    #[error("Overflow")]
    Overflow,

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    /// [geos::Error]
    #[cfg(feature = "geos")]
    #[error(transparent)]
    GeosError(#[from] geos::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoPathError>;
