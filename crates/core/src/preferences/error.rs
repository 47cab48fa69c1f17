//! Preference error types.

use meridian_shared::AppError;
use thiserror::Error;

/// Errors raised while loading or saving console state.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// The backing store failed.
    #[error("Preference store error: {0}")]
    Store(String),

    /// State could not be encoded.
    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

impl PreferenceError {
    /// Returns the error code for consumers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Store(_) => "PREFERENCE_STORE_ERROR",
            Self::Encode(_) => "PREFERENCE_ENCODE_ERROR",
        }
    }
}

impl From<PreferenceError> for AppError {
    fn from(err: PreferenceError) -> Self {
        Self::Internal(err.to_string())
    }
}
