//! State of the equipment list page: paging, sorting, search and filter.

use sgst_types::{ListaEquipos, Pagination};
use std::sync::Arc;
use std::time::Duration;

use super::debounce::Debouncer;
use super::sort::{EquipoColumn, SortState};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::hooks::Hooks;
use crate::services::ListParams;

#[derive(Debug)]
pub struct EquiposView {
    page: u32,
    limit: u32,
    sort: SortState<EquipoColumn>,
    search_input: String,
    search: String,
    debouncer: Debouncer<String>,
    id_tipo: Option<i64>,
    pagination: Pagination,
}

impl EquiposView {
    pub fn new(limit: u32, debounce: Duration) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            sort: SortState::default(),
            search_input: String::new(),
            search: String::new(),
            debouncer: Debouncer::new(debounce),
            id_tipo: None,
            pagination: Pagination::default(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.page_size, Duration::from_millis(config.search_debounce_ms))
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn sort(&self) -> &SortState<EquipoColumn> {
        &self.sort
    }

    /// Committed search, the one sent to the backend.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub const fn id_tipo(&self) -> Option<i64> {
        self.id_tipo
    }

    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Query for the current state. Only set values end up on the wire.
    pub fn params(&self) -> ListParams {
        ListParams {
            page: Some(self.page),
            limit: Some(self.limit),
            order_by: self.sort.column().map(|c| c.as_str().to_string()),
            order_dir: Some(self.sort.dir()),
            search: Some(self.search.clone()).filter(|s| !s.is_empty()),
            id_tipo: self.id_tipo,
        }
    }

    /// Raw keystrokes. The search is committed once input pauses.
    pub fn type_search(&mut self, input: &str) {
        self.search_input = input.to_string();
        self.debouncer.push(self.search_input.clone());
    }

    pub const fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Waits for the debounce to fire and commits the search. Cancel-safe.
    pub async fn search_fired(&mut self) {
        let search = self.debouncer.fired().await;
        self.commit_search(search);
    }

    /// Commit a search right away, bypassing the debounce.
    pub fn commit_search(&mut self, search: String) {
        self.debouncer.cancel();
        self.search_input.clone_from(&search);
        self.search = search;
        self.page = 1;
    }

    pub fn click_sort(&mut self, column: EquipoColumn) {
        self.sort.click(column);
    }

    pub fn set_tipo(&mut self, id_tipo: Option<i64>) {
        self.id_tipo = id_tipo;
        self.page = 1;
    }

    /// Jump to `page`, clamped to the known page count.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.clamp(1, self.pagination.total_pages.max(1));
    }

    pub fn next_page(&mut self) -> bool {
        if self.page < self.pagination.total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Fetch the current page through the cache and remember its pagination.
    pub async fn load(&mut self, hooks: &Hooks) -> Result<Arc<ListaEquipos>, ClientError> {
        let lista = hooks.equipos(&self.params()).await?;
        self.pagination = lista.pagination;
        Ok(lista)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgst_types::OrderDir;

    fn view() -> EquiposView {
        EquiposView::new(10, Duration::from_millis(500))
    }

    #[test]
    fn test_initial_params() {
        let params = view().params();
        assert_eq!(params.page, Some(1));
        assert_eq!(params.limit, Some(10));
        assert_eq!(params.order_by, None);
        assert_eq!(params.search, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_search_resets_page() {
        let mut view = view();
        view.pagination.total_pages = 5;
        view.set_page(4);

        view.type_search("a");
        view.type_search("ab");
        view.type_search("abc");
        assert_eq!(view.search(), "");

        view.search_fired().await;
        assert_eq!(view.search(), "abc");
        assert_eq!(view.page(), 1);
        assert!(!view.search_pending());
        assert_eq!(view.params().search.as_deref(), Some("abc"));
    }

    #[test]
    fn test_tipo_filter_resets_page() {
        let mut view = view();
        view.pagination.total_pages = 3;
        assert!(view.next_page());
        view.set_tipo(Some(2));
        assert_eq!(view.page(), 1);
        assert_eq!(view.params().id_tipo, Some(2));
    }

    #[test]
    fn test_page_guards() {
        let mut view = view();
        assert!(!view.prev_page());
        assert!(!view.next_page());

        view.pagination.total_pages = 2;
        assert!(view.next_page());
        assert!(!view.next_page());
        view.set_page(9);
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn test_sort_goes_to_params() {
        let mut view = view();
        view.click_sort(EquipoColumn::FechaRegistro);
        view.click_sort(EquipoColumn::FechaRegistro);
        let params = view.params();
        assert_eq!(params.order_by.as_deref(), Some("fecha_registro"));
        assert_eq!(params.order_dir, Some(OrderDir::Desc));
    }
}
