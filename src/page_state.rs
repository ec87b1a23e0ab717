use impl_helper::ImplHelper;
use log::trace;
use serde::Serialize;
use std::ops::Range;

use crate::types::Page;

/// Page parameter as it arrives from a request, before any validation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RequestedPage<'a> {
    #[default]
    Missing,
    Text(&'a str),
    Number(i64),
    /// Already a page number, as produced by navigation
    Page(Page),
}

impl<'a> From<Option<&'a str>> for RequestedPage<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Missing, Self::Text)
    }
}

impl<'a> From<&'a str> for RequestedPage<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RequestedPage<'_> {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<Page> for RequestedPage<'_> {
    fn from(value: Page) -> Self {
        Self::Page(value)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Candidate {
    Invalid,
    Below,
    Page(Page),
    // A whole number too large for `Page`
    Beyond,
}

impl From<RequestedPage<'_>> for Candidate {
    fn from(requested: RequestedPage<'_>) -> Self {
        match requested {
            RequestedPage::Missing => Self::Invalid,
            RequestedPage::Number(number) if number < 1 => Self::Below,
            RequestedPage::Number(number) => {
                Page::try_from(number).map_or(Self::Beyond, Self::Page)
            }
            RequestedPage::Page(0) => Self::Below,
            RequestedPage::Page(page) => Self::Page(page),
            RequestedPage::Text(text) => parse_page(text),
        }
    }
}

fn parse_page(text: &str) -> Candidate {
    let text = text.trim();

    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Candidate::Invalid;
    }

    if negative {
        return Candidate::Below;
    }

    match digits.parse::<Page>() {
        Ok(0) => Candidate::Below,
        Ok(page) => Candidate::Page(page),
        Err(_) => Candidate::Beyond,
    }
}

/// Where a request stands within a paginated collection
///
/// `current_page` is always within `1..=last_page`, or `1` when there is nothing to paginate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ImplHelper)]
pub struct PageState {
    #[helper(get)]
    total_items: usize,

    #[helper(get)]
    per_page: usize,

    #[helper(get)]
    current_page: Page,

    #[helper(get)]
    last_page: Page,
}

impl PageState {
    /// Never fails: malformed or missing input gives page 1, pages past the end give the last page.
    ///
    /// # Panics
    ///
    /// When `per_page` is zero.
    pub fn resolve<'a>(
        requested: impl Into<RequestedPage<'a>>,
        total_items: usize,
        per_page: usize,
    ) -> Self {
        assert!(per_page > 0, "per_page must be at least 1");

        let requested = requested.into();
        let last_page = total_items.div_ceil(per_page);

        let current_page = match Candidate::from(requested) {
            Candidate::Page(page) if page <= last_page => page,
            Candidate::Page(_) | Candidate::Beyond => {
                trace!("Requested page {requested:?} is past the last page {last_page}");
                last_page.max(1)
            }
            Candidate::Below | Candidate::Invalid => {
                trace!("Requested page {requested:?} is not a page number, using 1");
                1
            }
        };

        Self {
            total_items,
            per_page,
            current_page,
            last_page,
        }
    }

    /// Whether there is more than one page to navigate
    pub fn has_pages(&self) -> bool {
        self.last_page > 1
    }

    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn on_last_page(&self) -> bool {
        self.current_page >= self.last_page
    }

    /// Indices of the items shown on the current page
    pub fn item_range(&self) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.per_page)
            .min(self.total_items);
        let end = start.saturating_add(self.per_page).min(self.total_items);

        start..end
    }
}
