//! Pagination over the filtered records.
//!
//! Pages are 1-based. All functions here are total: out-of-range input is
//! clamped or yields an empty slice.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::Error;

/// Supported rows-per-page choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "usize")]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
}

impl PageSize {
    pub const ALLOWED: &'static [usize] = &[5, 10, 20];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
        }
    }

    pub fn all() -> &'static [PageSize] {
        &[PageSize::Five, PageSize::Ten, PageSize::Twenty]
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            20 => Ok(PageSize::Twenty),
            requested => Err(Error::InvalidPageSize {
                requested,
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let requested = s.trim().parse::<usize>().map_err(|_| Error::InvalidPageSize {
            requested: 0,
            allowed: Self::ALLOWED,
        })?;
        Self::try_from(requested)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Number of pages needed for `count` items, never less than 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Clamps a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of a page within `len` items, clipped to bounds.
pub fn page_range(len: usize, page: usize, page_size: usize) -> std::ops::Range<usize> {
    if page == 0 || page_size == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// The slice `[(page-1)*page_size, page*page_size)` of `items`, clipped.
///
/// Returns an empty slice for page 0 or a page past the end.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

/// Pager line data: "showing X of Y", "page N of M", button states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub showing: usize,
    pub total: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageSummary {
    pub fn new(total: usize, current_page: usize, page_size: usize) -> Self {
        let pages = total_pages(total, page_size);
        let range = page_range(total, current_page, page_size);
        Self {
            showing: range.len(),
            total,
            current_page,
            total_pages: pages,
            has_previous: current_page > 1,
            has_next: current_page < pages,
        }
    }
}
