//! Engine errors.
//!
//! Only load-time and construction-time problems are errors. Per-cell rules never fail:
//! out-of-bounds coordinates are ignored and a tick always runs to completion.

use thiserror::Error;

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Bundle JSON is malformed or has an unknown enum value (e.g. movement class)
    #[error("content bundle parse error: {0}")]
    Bundle(#[from] serde_json::Error),

    #[error("content bundle has no materials")]
    EmptyBundle,

    #[error("too many materials for u8 ids: {0}")]
    TooManyMaterials(usize),

    #[error("duplicate material key: {0}")]
    DuplicateMaterial(String),

    /// A material field names a key that is not in the bundle
    #[error("material `{material}` references unknown material `{reference}`")]
    DanglingReference { material: String, reference: String },

    #[error("required material `{0}` is missing from the bundle")]
    MissingMaterial(&'static str),

    #[error("material `{0}` has an invalid lifetime span")]
    InvalidLifetime(String),

    #[error("unknown rigid body shape: {0}")]
    UnknownShape(String),

    #[error("unknown rigid body material: {0}")]
    UnknownBodyMaterial(String),

    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },
}
