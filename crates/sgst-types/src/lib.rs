//! # SGST Types
//!
//! Wire types and error definitions shared by the SGST admin client.
//!
//! - **`error`** - the backend error envelope, session error codes and form errors
//! - **`models`** - DTOs exchanged verbatim with the REST API (equipment,
//!   equipment types, auth payloads, workshops, pagination)
//!
//! ## Architecture Role
//!
//! ```text
//!                sgst-types (this crate)
//!                        │
//!                        ▼
//!                   sgst-client
//!                        │
//!                        ▼
//!                     sgst-cli
//! ```
//!
//! Mutating DTOs carry no identity fields (`id_empresa`, `id_usuario`,
//! `id_taller`). The backend derives identity from the session cookies only.

pub mod error;
pub mod models;

pub use error::{ApiErrorBody, ApiErrorDetail, ErrorCode, FormCheck, FormError};

pub use models::{
    ActualizarEquipo, ActualizarTipoEquipo, CrearEquipo, CrearTaller, CrearTipoEquipo,
    DatosLogin, DatosRegistro, ElegirTaller, Equipo, ListaEquipos, OrderDir, Pagination,
    RespuestaEquipo, RespuestaMensaje, RespuestaTipoEquipo, Taller, TallerActual, TipoEquipo,
    Usuario,
};
