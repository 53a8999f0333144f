//! Equipment-type picker with filtering and inline creation.

use sgst_types::{CrearTipoEquipo, TipoEquipo};
use std::sync::Arc;

use crate::error::ClientError;
use crate::hooks::Hooks;

#[derive(Debug, Clone, Default)]
pub struct TipoSelect {
    tipos: Arc<Vec<TipoEquipo>>,
    value: Option<i64>,
    search_text: String,
    open: bool,
    nuevo_nombre: String,
}

impl TipoSelect {
    pub fn new(tipos: Arc<Vec<TipoEquipo>>) -> Self {
        Self { tipos, ..Self::default() }
    }

    pub fn set_tipos(&mut self, tipos: Arc<Vec<TipoEquipo>>) {
        self.tipos = tipos;
    }

    pub fn tipos(&self) -> &[TipoEquipo] {
        &self.tipos
    }

    pub const fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn set_value(&mut self, value: Option<i64>) {
        self.value = value;
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&TipoEquipo> {
        let id = self.value?;
        self.tipos.iter().find(|t| t.id_tipo == id)
    }

    /// Typing opens the list and filters it.
    pub fn type_text(&mut self, text: &str) {
        self.search_text = text.to_string();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Case-insensitive substring match on the type name. A blank filter
    /// keeps every type.
    pub fn filtered(&self) -> Vec<&TipoEquipo> {
        let filtro = self.search_text.trim().to_lowercase();
        self.tipos
            .iter()
            .filter(|t| filtro.is_empty() || t.nombre_tipo.to_lowercase().contains(&filtro))
            .collect()
    }

    pub fn select(&mut self, tipo: &TipoEquipo) {
        self.value = Some(tipo.id_tipo);
        self.search_text.clear();
        self.open = false;
    }

    /// Text shown in the input: the filter while open, else the selection.
    pub fn display_value(&self) -> &str {
        if self.open {
            &self.search_text
        } else {
            self.selected().map_or("", |t| t.nombre_tipo.as_str())
        }
    }

    pub fn set_nuevo_nombre(&mut self, nombre: &str) {
        self.nuevo_nombre = nombre.to_string();
    }

    /// Create the typed type and select it. A blank name does nothing.
    pub async fn crear_inline(&mut self, hooks: &Hooks) -> Result<Option<TipoEquipo>, ClientError> {
        let nombre = self.nuevo_nombre.trim();
        if nombre.is_empty() {
            return Ok(None);
        }
        let datos = CrearTipoEquipo { nombre_tipo: nombre.to_string() };
        let respuesta = hooks.crear_tipo(&datos).await?;
        let tipo = respuesta.tipo;

        let mut tipos = self.tipos.as_ref().clone();
        tipos.push(tipo.clone());
        self.tipos = Arc::new(tipos);
        self.select(&tipo);
        self.nuevo_nombre.clear();
        Ok(Some(tipo))
    }

    /// Look a type up by id or by exact (case-insensitive) name.
    pub fn resolve(&self, input: &str) -> Option<&TipoEquipo> {
        let input = input.trim();
        if let Ok(id) = input.parse::<i64>() {
            return self.tipos.iter().find(|t| t.id_tipo == id);
        }
        let lowered = input.to_lowercase();
        self.tipos.iter().find(|t| t.nombre_tipo.to_lowercase() == lowered)
    }
}
