//! REST mappers for each backend module.

mod auth;
mod equipos;
mod talleres;

pub use auth::AuthService;
pub use equipos::{EquiposService, ListParams};
pub use talleres::TalleresService;
