//! Error types for ledgerview-engine

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineErrorCode {
    /// Engine could not be started or reached
    Unavailable,
    /// IO failure while talking to the engine
    IoError,
    /// Engine produced output this layer could not decode
    Protocol,
    /// Engine reported a failure of its own (bad file, bad options)
    EngineReported,
}

impl std::fmt::Display for EngineErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineErrorCode::Unavailable => write!(f, "UNAVAILABLE"),
            EngineErrorCode::IoError => write!(f, "IO_ERROR"),
            EngineErrorCode::Protocol => write!(f, "PROTOCOL"),
            EngineErrorCode::EngineReported => write!(f, "ENGINE_REPORTED"),
        }
    }
}

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for EngineErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineErrorSeverity::Warning => write!(f, "warning"),
            EngineErrorSeverity::Error => write!(f, "error"),
            EngineErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Normalized failure descriptor for the engine boundary
///
/// Every engine failure is reduced to one of these variants so callers
/// can always render a defined "no data" state instead of propagating
/// engine-internal error vocabulary.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Engine unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Engine IO error")]
    IoError(#[from] io::Error),

    #[error("Malformed engine response: {message}")]
    Protocol { message: String },

    #[error("Engine error: {message}")]
    Engine { message: String },
}

impl EngineError {
    /// Get the error code
    pub fn code(&self) -> EngineErrorCode {
        match self {
            EngineError::Unavailable { .. } => EngineErrorCode::Unavailable,
            EngineError::IoError(_) => EngineErrorCode::IoError,
            EngineError::Protocol { .. } => EngineErrorCode::Protocol,
            EngineError::Engine { .. } => EngineErrorCode::EngineReported,
        }
    }

    /// Get the error severity
    ///
    /// Engine-reported failures (bad file, bad options) are
    /// user-correctable; an unreachable engine is not.
    pub fn severity(&self) -> EngineErrorSeverity {
        match self {
            EngineError::Unavailable { .. } => EngineErrorSeverity::Critical,
            EngineError::IoError(_) => EngineErrorSeverity::Error,
            EngineError::Protocol { .. } => EngineErrorSeverity::Error,
            EngineError::Engine { .. } => EngineErrorSeverity::Warning,
        }
    }
}

/// Result type with EngineError
pub type EngineResult<T> = Result<T, EngineError>;

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(EngineErrorCode::Unavailable.to_string(), "UNAVAILABLE");
        assert_eq!(EngineErrorCode::Protocol.to_string(), "PROTOCOL");
    }

    #[test]
    fn test_error_codes() {
        let error = EngineError::Engine {
            message: "file not found".to_string(),
        };
        assert_eq!(error.code(), EngineErrorCode::EngineReported);

        let error = EngineError::Unavailable {
            reason: "spawn failed".to_string(),
        };
        assert_eq!(error.code(), EngineErrorCode::Unavailable);
    }

    #[test]
    fn test_error_severity() {
        let error = EngineError::Unavailable {
            reason: "spawn failed".to_string(),
        };
        assert_eq!(error.severity(), EngineErrorSeverity::Critical);

        let error = EngineError::Engine {
            message: "file not found".to_string(),
        };
        assert_eq!(error.severity(), EngineErrorSeverity::Warning);
    }
}
