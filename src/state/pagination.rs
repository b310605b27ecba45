#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Rows shown per page of the appointment list.
pub const PER_PAGE: usize = 10;

/// Minimum collection size before pagination controls are shown at all.
/// A fixed threshold, intentionally not derived from `PER_PAGE`.
pub const CONTROLS_THRESHOLD: usize = 10;

/// Client-side pager over an in-memory collection.
///
/// Pure model: the page only stores the current page number and rebuilds
/// this struct from the live collection length on each render, so the pager
/// can never go stale against the data it slices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    /// 1-indexed current page.
    pub current_page: usize,
    /// Total number of items in the collection.
    pub total: usize,
}

/// One element of the rendered page-control strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Prev { enabled: bool },
    Page { number: usize, current: bool },
    Ellipsis,
    Next { enabled: bool },
}

impl Pager {
    /// A pager positioned on page 1.
    pub fn new(total: usize) -> Self {
        Self {
            current_page: 1,
            total,
        }
    }

    /// `ceil(total / PER_PAGE)`, never less than 1 so the current page
    /// always has a valid home even for an empty collection.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(PER_PAGE).max(1)
    }

    /// Half-open item range `[start, end)` for the current page, clamped
    /// to the collection length.
    pub fn page_bounds(&self) -> (usize, usize) {
        let start = self.current_page.saturating_sub(1) * PER_PAGE;
        let start = start.min(self.total);
        let end = (start + PER_PAGE).min(self.total);
        (start, end)
    }

    /// Target page for the "previous" control, clamped to page 1.
    pub fn prev_page(&self) -> usize {
        self.current_page.saturating_sub(1).max(1)
    }

    /// Target page for the "next" control, clamped to the last page.
    pub fn next_page(&self) -> usize {
        (self.current_page + 1).min(self.total_pages())
    }

    /// Move to `page`, clamped to `[1, total_pages]`.
    pub fn goto(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Whether the page-control strip is rendered at all.
    pub fn controls_visible(&self) -> bool {
        self.total >= CONTROLS_THRESHOLD
    }

    /// Build the page-control strip.
    ///
    /// Layout: prev, page 1, a window of one neighbor on each side of the
    /// current page, the last page, next. A gap between the window and the
    /// edge pages collapses to an ellipsis only when it spans more than one
    /// page; a gap of exactly one page renders that page number instead.
    pub fn page_items(&self) -> Vec<PageItem> {
        let total_pages = self.total_pages();
        let current = self.current_page;

        let mut items = vec![
            PageItem::Prev {
                enabled: current > 1,
            },
            PageItem::Page {
                number: 1,
                current: current == 1,
            },
        ];

        let window_start = current.saturating_sub(1).max(2);
        let window_end = (current + 1).min(total_pages.saturating_sub(1));

        // Gap between page 1 and the window.
        if window_start > 3 {
            items.push(PageItem::Ellipsis);
        } else if window_start == 3 {
            items.push(PageItem::Page {
                number: 2,
                current: false,
            });
        }

        for number in window_start..=window_end {
            items.push(PageItem::Page {
                number,
                current: number == current,
            });
        }

        // Gap between the window and the last page.
        if window_end + 2 < total_pages {
            items.push(PageItem::Ellipsis);
        } else if window_end + 2 == total_pages {
            items.push(PageItem::Page {
                number: total_pages - 1,
                current: false,
            });
        }

        if total_pages > 1 {
            items.push(PageItem::Page {
                number: total_pages,
                current: current == total_pages,
            });
        }

        items.push(PageItem::Next {
            enabled: current < total_pages,
        });

        items
    }
}
