//! Error codes and the JSON error envelope.
//!
//! DESIGN
//! ======
//! Every error that can reach an HTTP response implements [`ErrorCode`], so
//! the body always carries a grepable code next to the human message:
//! `{ "error": "E_UNKNOWN_BOT", "message": "unknown bot: bot9" }`.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Grepable error code and retryable flag for structured error responses.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn from_error(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self { error: err.error_code().to_owned(), message: err.to_string() }
    }
}
