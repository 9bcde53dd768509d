//! Type-safe error codes for API responses.
//!
//! Each code carries a string form for clients, an integer for logs and
//! metrics, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidIdentifier;
//! assert_eq!(code.as_str(), "INVALID_IDENTIFIER");
//! assert_eq!(code.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Identifier in path or body is not in the store's format
    InvalidIdentifier,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// No route matches the request
    NotFound,

    // Persistence errors (2000-2999)
    /// Document store unreachable or rejected the operation
    PersistenceError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier => "INVALID_IDENTIFIER",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::PersistenceError => "PERSISTENCE_ERROR",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// - 1000-1999: client errors
    /// - 2000-2999: persistence errors
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidIdentifier => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::PersistenceError => 2001,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier => "Invalid identifier format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::PersistenceError => "The document store failed to complete the operation",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
