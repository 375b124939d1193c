use thiserror::Error;

/// Unified error type for bump-version operations
#[derive(Error, Debug)]
pub enum BumpVersionError {
    #[error("Could not find `version = \"X.Y.Z\"` in {path}")]
    MissingVersionField { path: String },

    #[error("Unknown bump level: '{token}' (use major|minor|patch)")]
    InvalidBumpLevel { token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bump-version
pub type Result<T> = std::result::Result<T, BumpVersionError>;

impl BumpVersionError {
    /// Create a missing-version-field error naming the manifest path
    pub fn missing_version_field(path: impl Into<String>) -> Self {
        BumpVersionError::MissingVersionField { path: path.into() }
    }

    /// Create an invalid-bump-level error echoing the offending token
    pub fn invalid_bump_level(token: impl Into<String>) -> Self {
        BumpVersionError::InvalidBumpLevel {
            token: token.into(),
        }
    }
}
