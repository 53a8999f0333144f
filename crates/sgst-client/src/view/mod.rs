//! Front-end state that does not depend on a rendering toolkit.

mod debounce;
mod equipos;
mod forms;
mod pagination;
mod sort;
mod text;
mod tipo_select;

pub use debounce::Debouncer;
pub use equipos::EquiposView;
pub use forms::{blank_to_none, EditarEquipoForm, NuevoEquipoForm};
pub use pagination::{summary, visible_pages, PageItem};
pub use sort::{EquipoColumn, SortState};
pub use text::{cell, truncate};
pub use tipo_select::TipoSelect;
