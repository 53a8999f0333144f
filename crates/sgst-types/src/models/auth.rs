//! Authentication payloads.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::error::FormError;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used, reason = "literal pattern is known to compile")]
    Regex::new(r"^[\d\s+\-()]{8,20}$").unwrap()
});

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct DatosLogin {
    #[validate(email)]
    pub correo_usuario: String,
    #[validate(length(min = 1_u64))]
    pub password_usuario: String,
}

/// Body of `POST /auth/registro`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct DatosRegistro {
    #[validate(length(min = 1_u64, max = 100_u64))]
    pub nombre_usuario: String,
    #[validate(length(min = 1_u64, max = 150_u64))]
    pub apellidos_usuario: String,
    #[validate(email)]
    pub correo_usuario: String,
    #[validate(custom(function = "validate_phone"))]
    pub telefono_usuario: String,
    #[validate(custom(function = "validate_password_strength"))]
    pub password_usuario: String,
    #[validate(length(min = 1_u64))]
    pub confirmar_password_usuario: String,
}

impl DatosRegistro {
    /// Validate field rules plus the password confirmation.
    ///
    /// The confirmation check runs first, matching the order the backend
    /// reports problems in.
    pub fn check(&self) -> Result<(), FormError> {
        if self.password_usuario != self.confirmar_password_usuario {
            return Err(FormError::PasswordMismatch);
        }
        self.validate().map_err(|e| FormError::from_validation(&e))
    }
}

/// At least 8 characters with one letter and one digit.
pub(crate) fn validate_password_strength(value: &str) -> Result<(), ValidationError> {
    let strong = value.chars().count() >= 8
        && value.chars().any(char::is_alphabetic)
        && value.chars().any(|c| c.is_ascii_digit());
    if strong {
        Ok(())
    } else {
        Err(ValidationError::new("password_weak").with_message(
            "La contraseña debe tener al menos 8 caracteres, una letra y un número".into(),
        ))
    }
}

pub(crate) fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone_format")
            .with_message("Formato de teléfono inválido".into()))
    }
}

/// Generic `{message}` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RespuestaMensaje {
    pub message: String,
}

/// Current user as returned by `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usuario {
    pub id_usuario: String,
    pub id_empresa: Option<String>,
    pub nombre_usuario: String,
    pub apellidos_usuario: String,
    pub correo_usuario: String,
    pub telefono_usuario: String,
}

impl Usuario {
    /// Company administrators may pick any workshop of their company.
    pub const fn is_admin(&self) -> bool {
        self.id_empresa.is_some()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre_usuario, self.apellidos_usuario)
    }
}
