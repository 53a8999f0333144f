//! Error types for the SGST client.

use sgst_types::FormError;
use thiserror::Error;

/// Errors that can occur when using the SGST client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Failed to reach the backend.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// HTTP request failed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Api {
        /// HTTP status code.
        status: u16,
        /// `error.code` from the response envelope, if any.
        code: Option<String>,
        /// `error.message` from the response envelope, if any.
        message: Option<String>,
    },

    /// Access token expired and the refresh call failed.
    #[error("Session expired: {}", message.as_deref().unwrap_or("refresh rejected"))]
    SessionExpired {
        /// Message of the original 401 response.
        message: Option<String>,
    },

    /// Backend reported that the workshop session ended.
    #[error("Workshop session ended ({code})")]
    TallerSessionEnded {
        /// One of the workshop-session error codes.
        code: String,
        /// Message from the response envelope, if any.
        message: Option<String>,
    },

    /// Response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Form data rejected before sending.
    #[error("Validation failed: {0}")]
    Validation(#[from] FormError),
}

impl ClientError {
    /// HTTP status of the failed response, if one was received.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::SessionExpired { .. } => Some(401),
            _ => None,
        }
    }

    /// Server-provided error code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            Self::TallerSessionEnded { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Message suitable for a user-facing notice.
    ///
    /// Uses the server's `error.message` when present, the form error for
    /// client-side validation, and `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { message: Some(m), .. }
            | Self::SessionExpired { message: Some(m) }
            | Self::TallerSessionEnded { message: Some(m), .. } => m.clone(),
            Self::Validation(e) => e.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. } | Self::SessionExpired { .. })
    }
}
