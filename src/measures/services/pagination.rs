use serde::Serialize;

/// Paging block of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page_index: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Paging {
    pub fn new(page_index: usize, page_size: usize, total: usize) -> Self {
        Self {
            page_index,
            page_size,
            total,
        }
    }

    /// Number of items skipped before the page (pages start at 1)
    pub fn offset(&self) -> usize {
        offset(self.page_index, self.page_size)
    }
}

pub fn offset(page_index: usize, page_size: usize) -> usize {
    page_index.saturating_sub(1).saturating_mul(page_size)
}

/// Keeps the items of one page
pub fn paginate<T>(items: Vec<T>, page_index: usize, page_size: usize) -> Vec<T> {
    items
        .into_iter()
        .skip(offset(page_index, page_size))
        .take(page_size)
        .collect()
}
