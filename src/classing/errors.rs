//! Classing error types
//!
//! Lookups on a `ClassificationList` are total and answer `None` for
//! anything unknown. Errors only surface through the strict accessors
//! (`try_init_custom_classification`, `require_custom_classification`).
//!
//! Error codes:
//! - CLASSING_UNKNOWN_CLASSIFICATION (ERROR)

use std::fmt;

use thiserror::Error;

/// Severity levels for classing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The call failed, the structure is untouched
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Stable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassingErrorCode {
    /// No classification is registered under the requested name
    UnknownClassification,
}

impl ClassingErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ClassingErrorCode::UnknownClassification => "CLASSING_UNKNOWN_CLASSIFICATION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for ClassingErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Classing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassingError {
    #[error("[ERROR] CLASSING_UNKNOWN_CLASSIFICATION: no classification named `{0}`")]
    UnknownClassification(String),
}

impl ClassingError {
    /// Create an unknown classification error
    pub fn unknown_classification(name: impl Into<String>) -> Self {
        ClassingError::UnknownClassification(name.into())
    }

    /// Returns the error code
    pub fn code(&self) -> ClassingErrorCode {
        match self {
            ClassingError::UnknownClassification(_) => ClassingErrorCode::UnknownClassification,
        }
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code().severity()
    }

    /// Classing errors never leave the structure in a partial state
    pub fn is_fatal(&self) -> bool {
        false
    }
}

/// Result type for strict classing operations
pub type ClassingResult<T> = Result<T, ClassingError>;
