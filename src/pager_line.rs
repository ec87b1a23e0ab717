use itertools::Itertools;
use ratatui::style::{Style, Stylize};

use pageslider::{Labels, LinkDescriptor, Pagination};

use crate::textline_model::Span;

/// Turns the controls into padded, styled spans for a single terminal line
pub fn pager_spans(pagination: &Pagination, labels: &Labels) -> Vec<Span> {
    pagination
        .controls()
        .map(|descriptor| match descriptor {
            LinkDescriptor::Page {
                number,
                is_current: true,
                ..
            } => (format!(" {} ", number), Style::default().reversed().bold()),
            LinkDescriptor::Page { number, .. } => (format!(" {} ", number), Style::default()),
            LinkDescriptor::Ellipsis => (format!(" {} ", labels.ellipsis), Style::default().dim()),
            LinkDescriptor::Nav {
                direction, enabled, ..
            } => {
                let style = if *enabled {
                    Style::default().bold()
                } else {
                    Style::default().dim()
                };

                (format!(" {} ", labels.nav(*direction)), style)
            }
        })
        .collect_vec()
}
