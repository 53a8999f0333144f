//! Paged list responses and sort direction.

use serde::{Deserialize, Serialize};

use super::Equipo;

/// Sort direction as sent in the `order_dir` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDir {
    #[default]
    Asc,
    Desc,
}

impl OrderDir {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl std::fmt::Display for OrderDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pagination block of list responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 10, total: 0, total_pages: 1 }
    }
}

impl Pagination {
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Response of `GET /equipos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListaEquipos {
    pub data: Vec<Equipo>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_dir_wire_format() {
        assert_eq!(serde_json::to_string(&OrderDir::Desc).unwrap(), "\"DESC\"");
        assert_eq!(OrderDir::Asc.toggled(), OrderDir::Desc);
        assert_eq!(OrderDir::Desc.toggled(), OrderDir::Asc);
    }

    #[test]
    fn test_missing_pagination_defaults() {
        let lista: ListaEquipos = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(lista.pagination, Pagination { page: 1, limit: 10, total: 0, total_pages: 1 });
        assert!(!lista.pagination.has_prev());
        assert!(!lista.pagination.has_next());
    }
}
