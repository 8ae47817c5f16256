use serde::{Deserialize, Serialize};

/// One page of an ordered result set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of results before slicing.
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Slices `[(page - 1) * page_size, page * page_size)` out of `items`.
///
/// Pages are 1-based. Page 0 and pages past the end yield no items; nothing is
/// clamped here.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let total = items.len();

    let start = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size));

    let items = match start {
        Some(start) if page_size > 0 => items.into_iter().skip(start).take(page_size).collect(),
        _ => Vec::new(),
    };

    Page {
        items,
        total,
        total_pages: total_pages(total, page_size),
        page,
        page_size,
    }
}

/// Clamps a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}
