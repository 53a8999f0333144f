//! Page-number window for the pagination bar.

use sgst_types::Pagination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl std::fmt::Display for PageItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Page buttons to show: all pages up to seven, otherwise first, last and
/// the neighbours of `current`, with ellipses over the gaps.
pub fn visible_pages(current: u32, total: u32) -> Vec<PageItem> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    if total <= 7 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }
    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total - 1);
    items.extend((start..=end).map(PageItem::Page));
    if current < total - 2 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// One-line summary, e.g. `Página 2 de 5 (43 equipos)`.
pub fn summary(pagination: &Pagination) -> String {
    format!(
        "Página {} de {} ({} equipos)",
        pagination.page,
        pagination.total_pages.max(1),
        pagination.total
    )
}
