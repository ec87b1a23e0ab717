use serde::Serialize;
use std::{iter, ops::Index, slice};

use crate::types::{Direction, Page};

/// One pagination control, independent of how it ends up drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkDescriptor {
    Page {
        number: Page,
        is_current: bool,
        /// `None` for the current page
        url: Option<String>,
    },
    Ellipsis,
    Nav {
        direction: Direction,
        target_page: Option<Page>,
        enabled: bool,
        url: Option<String>,
    },
}

impl LinkDescriptor {
    pub fn page(number: Page, url: String) -> Self {
        Self::Page {
            number,
            is_current: false,
            url: Some(url),
        }
    }

    pub fn current(number: Page) -> Self {
        Self::Page {
            number,
            is_current: true,
            url: None,
        }
    }

    pub fn nav(direction: Direction, target_page: Page, url: String) -> Self {
        Self::Nav {
            direction,
            target_page: Some(target_page),
            enabled: true,
            url: Some(url),
        }
    }

    pub fn disabled_nav(direction: Direction) -> Self {
        Self::Nav {
            direction,
            target_page: None,
            enabled: false,
            url: None,
        }
    }

    pub fn page_number(&self) -> Option<Page> {
        match self {
            Self::Page { number, .. } => Some(*number),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Page { url, .. } | Self::Nav { url, .. } => url.as_deref(),
            Self::Ellipsis => None,
        }
    }

    /// Whether activating the control leads somewhere
    pub fn is_link(&self) -> bool {
        self.url().is_some()
    }
}

/// Controls produced by one render: the page sequence between previous and next
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    previous: LinkDescriptor,
    pages: Vec<LinkDescriptor>,
    next: LinkDescriptor,
}

impl Pagination {
    pub fn new(previous: LinkDescriptor, pages: Vec<LinkDescriptor>, next: LinkDescriptor) -> Self {
        Self {
            previous,
            pages,
            next,
        }
    }

    pub fn previous(&self) -> &LinkDescriptor {
        &self.previous
    }

    pub fn next(&self) -> &LinkDescriptor {
        &self.next
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LinkDescriptor> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, LinkDescriptor> {
        self.pages.iter()
    }

    /// Previous, the pages, then next, in display order
    pub fn controls(&self) -> impl Iterator<Item = &LinkDescriptor> {
        iter::once(&self.previous)
            .chain(self.pages.iter())
            .chain(iter::once(&self.next))
    }
}

impl Index<usize> for Pagination {
    type Output = LinkDescriptor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pages[index]
    }
}

impl<'a> IntoIterator for &'a Pagination {
    type Item = &'a LinkDescriptor;
    type IntoIter = slice::Iter<'a, LinkDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
