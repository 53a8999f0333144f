//! Error definitions for the SGST API.
//!
//! The backend reports every failure as `{"error": {"code", "message"}}`.
//! [`ErrorCode`] names the codes the client reacts to; everything else is
//! passed through to the user as the server's message.

mod form;

pub use form::{FormCheck, FormError};

use serde::{Deserialize, Serialize};

/// Error envelope returned by the backend on any non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

/// Code and human-readable message of a backend error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiErrorBody {
    /// Parse an error body, tolerating partial envelopes.
    ///
    /// Returns `(code, message)` with either side absent when the body is not
    /// the standard envelope or a field is missing/empty.
    pub fn parse_lenient(body: &[u8]) -> (Option<String>, Option<String>) {
        let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
            return (None, None);
        };
        let Some(error) = value.get("error") else {
            return (None, None);
        };
        let field = |name: &str| {
            error
                .get(name)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        (field("code"), field("message"))
    }
}

/// Error codes with client-side meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request reached a workshop-scoped endpoint without a workshop cookie.
    TallerNoEspecificado,
    /// The workshop selection expired server-side.
    NoHayTallerActivo,
}

impl ErrorCode {
    /// Codes that mean the workshop session ended (as opposed to auth expiry).
    pub const TALLER_SESSION_ENDED: [Self; 2] =
        [Self::TallerNoEspecificado, Self::NoHayTallerActivo];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TallerNoEspecificado => "TALLER_NO_ESPECIFICADO",
            Self::NoHayTallerActivo => "NO_HAY_TALLER_ACTIVO",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::TALLER_SESSION_ENDED.into_iter().find(|c| c.as_str() == code)
    }

    /// Whether `code` signals the end of the workshop session.
    pub fn ends_taller_session(code: &str) -> bool {
        Self::from_code(code).is_some()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
