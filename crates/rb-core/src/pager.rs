//! # Pager
//!
//! Page arithmetic and the navigation link strip shown under the post list.

use std::num::NonZeroU32;

use crate::error::{AppError, Result};

/// Posts shown per list page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Parameter name carrying the page number in every board URL.
pub const PAGE_PARAM: &str = "pageNum";

const DEFAULT_SIZE: NonZeroU32 = match NonZeroU32::new(DEFAULT_PAGE_SIZE) {
    Some(size) => size,
    None => panic!("default page size must be non-zero"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: NonZeroU32,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page_size: DEFAULT_SIZE }
    }
}

impl Pager {
    /// Fails on a page size of zero.
    pub fn new(page_size: u32) -> Result<Self> {
        NonZeroU32::new(page_size)
            .map(|page_size| Self { page_size })
            .ok_or_else(|| AppError::Internal("page size must be at least 1".to_string()))
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.get()
    }

    /// `ceil(total_items / page_size)`, but never less than 1 so the
    /// navigation always offers page 1.
    pub fn page_count(&self, total_items: u64) -> u32 {
        let size = u64::from(self.page_size.get());
        let pages = total_items.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Keeps `requested` within `1..=total_pages`.
    pub fn clamp(&self, requested: u32, total_pages: u32) -> u32 {
        requested.min(total_pages).max(1)
    }

    /// 1-based inclusive bounds of the posts shown on `current_page`.
    pub fn item_window(&self, current_page: u32) -> (u64, u64) {
        let size = u64::from(self.page_size.get());
        let page = u64::from(current_page.max(1));
        ((page - 1) * size + 1, page * size)
    }

    /// Renders a link for every page from 1 to `total_pages`. The current
    /// page is highlighted and not linked. `base_url` may already carry a
    /// query string; the page parameter is appended after it.
    pub fn render_page_links(&self, current_page: u32, total_pages: u32, base_url: &str) -> String {
        let separator = if base_url.contains('?') { '&' } else { '?' };

        (1..=total_pages.max(1))
            .map(|page| {
                if page == current_page {
                    format!("<span class=\"current-page\">{}</span>", page)
                } else {
                    format!(
                        "<a href=\"{}{}{}={}\">{}</a>",
                        base_url, separator, PAGE_PARAM, page, page
                    )
                }
            })
            .collect::<Vec<_>>()
            .join("&nbsp;")
    }
}
