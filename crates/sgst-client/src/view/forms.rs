//! Equipment form state: raw inputs in, request bodies out.

use sgst_types::{ActualizarEquipo, CrearEquipo, Equipo, FormError};

/// Empty input means "no value".
pub fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| value.to_string())
}

/// New-equipment form. `id_tipo == 0` means no type picked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NuevoEquipoForm {
    pub id_tipo: i64,
    pub num_serie: String,
    pub marca_equipo: String,
    pub modelo_equipo: String,
    pub descripcion_equipo: String,
}

impl NuevoEquipoForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submit(&self) -> Result<CrearEquipo, FormError> {
        if self.id_tipo == 0 {
            return Err(FormError::required("id_tipo"));
        }
        let num_serie = self.num_serie.trim();
        if num_serie.is_empty() {
            return Err(FormError::required("num_serie"));
        }
        Ok(CrearEquipo {
            id_tipo: self.id_tipo,
            num_serie: num_serie.to_string(),
            marca_equipo: blank_to_none(&self.marca_equipo),
            modelo_equipo: blank_to_none(&self.modelo_equipo),
            descripcion_equipo: blank_to_none(&self.descripcion_equipo),
        })
    }
}

/// Edit form seeded from a record. Only changed fields are submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditarEquipoForm {
    original: Equipo,
    pub id_tipo: i64,
    pub num_serie: String,
    pub marca_equipo: String,
    pub modelo_equipo: String,
    pub descripcion_equipo: String,
}

impl EditarEquipoForm {
    pub fn seed(equipo: &Equipo) -> Self {
        Self {
            original: equipo.clone(),
            id_tipo: equipo.id_tipo,
            num_serie: equipo.num_serie.clone(),
            marca_equipo: equipo.marca_equipo.clone().unwrap_or_default(),
            modelo_equipo: equipo.modelo_equipo.clone().unwrap_or_default(),
            descripcion_equipo: equipo.descripcion_equipo.clone().unwrap_or_default(),
        }
    }

    pub fn id_equipo(&self) -> i64 {
        self.original.id_equipo
    }

    pub fn submit(&self) -> Result<ActualizarEquipo, FormError> {
        let num_serie = self.num_serie.trim();
        if num_serie.is_empty() {
            return Err(FormError::required("num_serie"));
        }
        if self.id_tipo == 0 {
            return Err(FormError::required("id_tipo"));
        }
        let o = &self.original;
        Ok(ActualizarEquipo {
            id_tipo: (self.id_tipo != o.id_tipo).then_some(self.id_tipo),
            num_serie: (num_serie != o.num_serie).then(|| num_serie.to_string()),
            marca_equipo: changed(&self.marca_equipo, o.marca_equipo.as_deref()),
            modelo_equipo: changed(&self.modelo_equipo, o.modelo_equipo.as_deref()),
            descripcion_equipo: changed(&self.descripcion_equipo, o.descripcion_equipo.as_deref()),
        })
    }
}

fn changed(input: &str, before: Option<&str>) -> Option<Option<String>> {
    let after = blank_to_none(input);
    (after.as_deref() != before).then_some(after)
}
