//! Client-side form validation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised before a form is submitted to the backend.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum FormError {
    /// A required field is empty or missing
    #[error("El campo {field} es obligatorio")]
    Required {
        /// Wire name of the missing field
        field: String,
    },

    /// Password and its confirmation differ
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,

    /// Field failed a validation rule
    #[error("Valor inválido en {field}: {message}")]
    Invalid {
        /// Wire name of the invalid field
        field: String,
        /// Description of the rule that failed
        message: String,
    },
}

impl FormError {
    pub fn required(field: &str) -> Self {
        Self::Required { field: field.to_string() }
    }

    /// Flatten `validator` output into the first failing field.
    pub fn from_validation(errors: &validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        let Some((field, list)) = fields.into_iter().next() else {
            return Self::Invalid { field: "form".to_string(), message: errors.to_string() };
        };
        let message = list
            .first()
            .and_then(|e| e.message.as_ref().map(ToString::to_string))
            .or_else(|| list.first().map(|e| e.code.to_string()))
            .unwrap_or_default();
        Self::Invalid { field: field.to_string(), message }
    }
}

/// `validator` rules of a form, flattened into a [`FormError`].
pub trait FormCheck {
    fn check_fields(&self) -> Result<(), FormError>;
}

impl<T: validator::Validate> FormCheck for T {
    fn check_fields(&self) -> Result<(), FormError> {
        self.validate().map_err(|e| FormError::from_validation(&e))
    }
}
