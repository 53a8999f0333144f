//! Workshop (taller) DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Workshop selected for the current session (`GET /auth/me/taller`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TallerActual {
    pub id_taller: String,
    pub rol_taller: String,
}

/// Workshop listed by `GET /talleres`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Taller {
    pub id_taller: String,
    pub id_empresa: String,
    pub nombre_taller: String,
    #[serde(default)]
    pub telefono_taller: Option<String>,
    #[serde(default)]
    pub correo_taller: Option<String>,
    #[serde(default)]
    pub direccion_taller: Option<String>,
    #[serde(default)]
    pub rfc_taller: Option<String>,
    #[serde(default)]
    pub ruta_logo: Option<String>,
}

/// Body of `POST /auth/taller`.
///
/// The only request that names a workshop: it asks the backend to bind one
/// to the session cookie. The backend checks company ownership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElegirTaller {
    pub id_taller: String,
}

/// Body of `POST /talleres`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CrearTaller {
    #[validate(length(min = 1_u64, max = 150_u64))]
    pub nombre_taller: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20_u64))]
    pub telefono_taller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub correo_taller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255_u64))]
    pub direccion_taller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20_u64))]
    pub rfc_taller: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crear_taller_validation() {
        let ok = CrearTaller { nombre_taller: "Centro".to_string(), ..Default::default() };
        assert!(ok.validate().is_ok());

        let bad_mail = CrearTaller {
            nombre_taller: "Centro".to_string(),
            correo_taller: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(bad_mail.validate().is_err());
        assert!(CrearTaller::default().validate().is_err());
    }
}
