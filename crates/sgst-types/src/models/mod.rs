//! DTOs exchanged with the SGST backend.
//!
//! Field names are the wire names; values are used as-is for display and
//! editing.

mod auth;
mod equipo;
mod pagination;
mod taller;

pub use auth::{DatosLogin, DatosRegistro, RespuestaMensaje, Usuario};
pub use equipo::{
    ActualizarEquipo, ActualizarTipoEquipo, CrearEquipo, CrearTipoEquipo, Equipo,
    RespuestaEquipo, RespuestaTipoEquipo, TipoEquipo,
};
pub use pagination::{ListaEquipos, OrderDir, Pagination};
pub use taller::{CrearTaller, ElegirTaller, Taller, TallerActual};
