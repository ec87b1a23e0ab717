//! Pagination controls for a collection split across pages.
//!
//! [`PageState`] resolves a raw page parameter against a total item count.
//! [`WindowRenderer`] turns it into a [`Pagination`]: page links, ellipses and
//! previous/next controls, with every url built by a caller supplied [`PageUrl`].

pub mod descriptor;
pub mod page_state;
pub mod paginated;
pub mod preferences;
pub mod presenter;
pub mod query;
pub mod types;
pub mod utils;
pub mod window;

pub use crate::{
    descriptor::{LinkDescriptor, Pagination},
    page_state::{PageState, RequestedPage},
    paginated::Paginated,
    preferences::Preferences,
    presenter::{BootstrapPresenter, Labels, Present, TextPresenter},
    query::{LinkUrls, PageUrl, QueryOverrides, QueryPageUrl},
    types::{Direction, NextRule, Page},
    window::WindowRenderer,
};
