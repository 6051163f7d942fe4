// ABOUTME: Error types for the shopfront extractor including ErrorCode enum and ExtractError struct.
// ABOUTME: Only API-edge failures live here; missing page fragments resolve to defaults instead.

use std::fmt;

/// Error codes representing the few failures the extractor reports to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    Serialize,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Serialize => "serialization error",
        };
        write!(f, "{}", s)
    }
}

/// The error type for builder and output operations.
#[derive(Debug, thiserror::Error)]
pub struct ExtractError {
    pub code: ErrorCode,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shopfront: {}: {}", self.op, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ExtractError {
    /// Create an InvalidUrl error.
    pub fn invalid_url(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::InvalidUrl,
            op: op.into(),
            source,
        }
    }

    /// Create a Serialize error.
    pub fn serialize(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::Serialize,
            op: op.into(),
            source,
        }
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a Serialize error.
    pub fn is_serialize(&self) -> bool {
        self.code == ErrorCode::Serialize
    }
}
