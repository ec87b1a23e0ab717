use itertools::Itertools;
use maud::{html, Markup, PreEscaped};
use serde::Deserialize;

use crate::{
    descriptor::{LinkDescriptor, Pagination},
    types::Direction,
};

/// Text of the inert and navigation controls. Markup presenters emit them unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    pub previous: String,
    pub next: String,
    pub ellipsis: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            previous: "&laquo;".to_string(),
            next: "&raquo;".to_string(),
            ellipsis: "...".to_string(),
        }
    }
}

impl Labels {
    /// Labels for a terminal, where entities mean nothing
    pub fn plain() -> Self {
        Self {
            previous: "«".to_string(),
            next: "»".to_string(),
            ellipsis: "…".to_string(),
        }
    }

    pub fn nav(&self, direction: Direction) -> &str {
        match direction {
            Direction::Previous => &self.previous,
            Direction::Next => &self.next,
        }
    }
}

pub trait Present {
    fn present(&self, pagination: &Pagination) -> String;
}

/// Twitter Bootstrap list items: links are `active`, everything inert is `disabled`
///
/// Labels are written as markup so entities like `&laquo;` survive. Urls and page numbers are escaped.
#[derive(Debug, Default, Clone)]
pub struct BootstrapPresenter {
    labels: Labels,
}

impl BootstrapPresenter {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    fn label(&self, descriptor: &LinkDescriptor) -> Markup {
        match descriptor {
            LinkDescriptor::Page { number, .. } => html! { (number) },
            LinkDescriptor::Ellipsis => html! { (PreEscaped(self.labels.ellipsis.as_str())) },
            LinkDescriptor::Nav { direction, .. } => {
                html! { (PreEscaped(self.labels.nav(*direction))) }
            }
        }
    }

    fn item(&self, descriptor: &LinkDescriptor) -> Markup {
        let label = self.label(descriptor);

        html! {
            @if let Some(url) = descriptor.url() {
                li class="active" { a href=(url) { (label) } }
            } @else {
                li class="disabled" { a href="#" { (label) } }
            }
        }
    }

    pub fn markup(&self, pagination: &Pagination) -> Markup {
        html! {
            @for descriptor in pagination.controls() {
                (self.item(descriptor))
            }
        }
    }
}

impl Present for BootstrapPresenter {
    fn present(&self, pagination: &Pagination) -> String {
        self.markup(pagination).into_string()
    }
}

/// Single line such as `« 1 2 [3] 4 5 … 19 20 »`
#[derive(Debug, Clone)]
pub struct TextPresenter {
    labels: Labels,
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new(Labels::plain())
    }
}

impl TextPresenter {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }
}

impl Present for TextPresenter {
    fn present(&self, pagination: &Pagination) -> String {
        pagination
            .controls()
            .map(|descriptor| match descriptor {
                LinkDescriptor::Page {
                    number,
                    is_current: true,
                    ..
                } => format!("[{}]", number),
                LinkDescriptor::Page { number, .. } => number.to_string(),
                LinkDescriptor::Ellipsis => self.labels.ellipsis.clone(),
                LinkDescriptor::Nav { direction, .. } => self.labels.nav(*direction).to_string(),
            })
            .join(" ")
    }
}
