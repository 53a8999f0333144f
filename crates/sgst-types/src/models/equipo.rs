//! Equipment and equipment-type DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// An equipment unit registered in the active workshop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Equipo {
    pub id_equipo: i64,
    pub id_taller: String,
    pub id_tipo: i64,
    pub num_serie: String,
    pub marca_equipo: Option<String>,
    pub modelo_equipo: Option<String>,
    pub descripcion_equipo: Option<String>,
    /// 1 = active, 0 = inactive
    pub activo: i64,
    pub fecha_registro: String,
    pub ultima_actualizacion: Option<String>,
    /// Joined type name, present on list and detail responses
    #[serde(default)]
    pub nombre_tipo: Option<String>,
}

impl Equipo {
    pub const fn is_active(&self) -> bool {
        self.activo != 0
    }
}

/// Equipment type (taxonomy entry) of a workshop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TipoEquipo {
    pub id_tipo: i64,
    pub id_taller: String,
    pub nombre_tipo: String,
    pub activo: i64,
    pub fecha_creacion: String,
}

/// Body of `POST /equipos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CrearEquipo {
    #[validate(range(min = 1_i64))]
    pub id_tipo: i64,
    #[validate(length(min = 1_u64, max = 100_u64))]
    pub num_serie: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marca_equipo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modelo_equipo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion_equipo: Option<String>,
}

/// Body of `PUT /equipos/:id`. Absent fields are left unchanged.
///
/// The nullable columns use a double option: `Some(None)` is sent as `null`
/// and clears the value, `None` omits the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActualizarEquipo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_tipo: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_serie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marca_equipo: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modelo_equipo: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion_equipo: Option<Option<String>>,
}

impl ActualizarEquipo {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Body of `POST /equipos/tipos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CrearTipoEquipo {
    #[validate(length(min = 1_u64, max = 100_u64))]
    pub nombre_tipo: String,
}

/// Body of `PUT /equipos/tipos/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActualizarTipoEquipo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_tipo: Option<String>,
}

/// Response of equipment create/update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RespuestaEquipo {
    pub message: String,
    pub equipo: Equipo,
}

/// Response of equipment-type create/update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RespuestaTipoEquipo {
    pub message: String,
    pub tipo: TipoEquipo,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_equipo_accepts_missing_nombre_tipo() {
        let json = r#"{
            "id_equipo": 7, "id_taller": "t-1", "id_tipo": 2, "num_serie": "SN-1",
            "marca_equipo": null, "modelo_equipo": "X", "descripcion_equipo": null,
            "activo": 1, "fecha_registro": "2025-01-01T00:00:00", "ultima_actualizacion": null
        }"#;
        let equipo: Equipo = serde_json::from_str(json).unwrap();
        assert_eq!(equipo.nombre_tipo, None);
        assert!(equipo.is_active());
    }

    #[test]
    fn test_mutating_bodies_never_carry_identity_fields() {
        let crear = CrearEquipo {
            id_tipo: 3,
            num_serie: "SN".to_string(),
            marca_equipo: Some("ACME".to_string()),
            ..Default::default()
        };
        let actualizar =
            ActualizarEquipo { num_serie: Some("SN2".to_string()), ..Default::default() };
        let tipo = CrearTipoEquipo { nombre_tipo: "Laptop".to_string() };

        for body in [
            serde_json::to_value(&crear).unwrap(),
            serde_json::to_value(&actualizar).unwrap(),
            serde_json::to_value(&tipo).unwrap(),
        ] {
            let obj = body.as_object().unwrap();
            for forbidden in ["id_taller", "id_empresa", "id_usuario"] {
                assert!(!obj.contains_key(forbidden), "{forbidden} leaked into {body}");
            }
        }
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let body = ActualizarEquipo { id_tipo: Some(4), ..Default::default() };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"id_tipo":4}"#);

        let cleared = ActualizarEquipo { marca_equipo: Some(None), ..Default::default() };
        assert_eq!(serde_json::to_string(&cleared).unwrap(), r#"{"marca_equipo":null}"#);
        assert!(ActualizarEquipo::default().is_empty());
    }

    #[test]
    fn test_crear_equipo_requires_tipo_and_serial() {
        assert!(CrearEquipo::default().validate().is_err());
        let ok = CrearEquipo { id_tipo: 1, num_serie: "A".to_string(), ..Default::default() };
        assert!(ok.validate().is_ok());
    }
}
