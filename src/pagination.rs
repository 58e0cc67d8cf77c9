use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 5;
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 100;

/// SQL binds offsets and limits as signed 64-bit integers.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// `?page=<n>&size=<n>` on list endpoints. Pages are zero-based.
#[derive(Deserialize, Default, Clone, Copy, Debug)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u64 {
    DEFAULT_MAX_PAGE_SIZE
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub size: u64,
    pub offset: u64,
    pub limit: u64,
}

impl PaginationConfig {
    /// Resolves a query into an offset/limit pair: `offset = page * size`.
    ///
    /// A missing or zero size falls back to the default, and sizes above the
    /// maximum are clamped to it. Offsets past the last bindable row are
    /// capped, which still yields an empty page.
    pub fn window(&self, query: &PageQuery) -> PageWindow {
        let page = query.page.unwrap_or(0);
        let size = match query.size {
            None | Some(0) => self.default_page_size,
            Some(size) => size,
        }
        .clamp(1, self.max_page_size.clamp(1, MAX_OFFSET));
        PageWindow {
            page,
            size,
            offset: page.saturating_mul(size).min(MAX_OFFSET),
            limit: size,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, window: PageWindow, total_elements: u64) -> Self {
        Page {
            content,
            page: window.page,
            size: window.size,
            total_elements,
            total_pages: total_elements.div_ceil(window.size),
        }
    }
}
