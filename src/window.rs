use impl_helper::ImplHelper;
use itertools::Itertools;
use log::debug;

use crate::{
    descriptor::{LinkDescriptor, Pagination},
    page_state::PageState,
    query::{LinkUrls, PageUrl},
    types::{Direction, NextRule, Page},
};

/// Smallest last page that gets a slider: 2 leading pages, ellipsis, 7-page window, ellipsis, 2 trailing pages
pub const SLIDER_THRESHOLD: Page = 13;

/// Distance from either end within which the slider sticks to that end
pub const EDGE_WINDOW: Page = 6;

/// Pages shown on each side of the current page in the middle of the slider
pub const ADJACENT_PAGES: Page = 3;

/// Decides which page links to show for a [`PageState`]
///
/// Below [`SLIDER_THRESHOLD`] pages every page gets a link. From there on a sliding
/// window follows the current page, capped by the first and last two pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ImplHelper)]
pub struct WindowRenderer {
    state: PageState,

    #[helper(all)]
    next_rule: NextRule,
}

impl WindowRenderer {
    pub fn new(state: PageState) -> Self {
        Self {
            state,
            next_rule: NextRule::default(),
        }
    }

    pub fn render<U: PageUrl + ?Sized>(&self, urls: &LinkUrls<U>) -> Pagination {
        let last_page = *self.state.last_page();

        let pages = if last_page < SLIDER_THRESHOLD {
            debug!("Rendering all {last_page} pages");
            self.page_range(1, last_page, urls)
        } else {
            self.page_slider(urls)
        };

        Pagination::new(self.previous(urls), pages, self.next(urls))
    }

    fn page_range<U: PageUrl + ?Sized>(
        &self,
        start: Page,
        end: Page,
        urls: &LinkUrls<U>,
    ) -> Vec<LinkDescriptor> {
        let current_page = *self.state.current_page();

        (start..=end)
            .map(|page| {
                if page == current_page {
                    LinkDescriptor::current(page)
                } else {
                    LinkDescriptor::page(page, urls.url(page))
                }
            })
            .collect_vec()
    }

    fn page_slider<U: PageUrl + ?Sized>(&self, urls: &LinkUrls<U>) -> Vec<LinkDescriptor> {
        let current_page = *self.state.current_page();
        let last_page = *self.state.last_page();

        if current_page <= EDGE_WINDOW {
            debug!("Page {current_page} of {last_page}: slider sticks to the start");

            let mut pages = self.page_range(1, EDGE_WINDOW + 2, urls);
            pages.extend(self.finish(urls));
            pages
        } else if current_page >= last_page - EDGE_WINDOW {
            debug!("Page {current_page} of {last_page}: slider sticks to the end");

            let mut pages = self.start(urls);
            pages.extend(self.page_range(last_page - EDGE_WINDOW - 2, last_page, urls));
            pages
        } else {
            debug!("Page {current_page} of {last_page}: slider is centered");

            let mut pages = self.start(urls);
            pages.extend(self.page_range(
                current_page - ADJACENT_PAGES,
                current_page + ADJACENT_PAGES,
                urls,
            ));
            pages.extend(self.finish(urls));
            pages
        }
    }

    /// First two pages followed by an ellipsis
    fn start<U: PageUrl + ?Sized>(&self, urls: &LinkUrls<U>) -> Vec<LinkDescriptor> {
        let mut pages = self.page_range(1, 2, urls);
        pages.push(LinkDescriptor::Ellipsis);
        pages
    }

    /// An ellipsis followed by the last two pages
    fn finish<U: PageUrl + ?Sized>(&self, urls: &LinkUrls<U>) -> Vec<LinkDescriptor> {
        let last_page = *self.state.last_page();

        let mut pages = vec![LinkDescriptor::Ellipsis];
        pages.extend(self.page_range(last_page - 1, last_page, urls));
        pages
    }

    fn previous<U: PageUrl + ?Sized>(&self, urls: &LinkUrls<U>) -> LinkDescriptor {
        let current_page = *self.state.current_page();

        if self.state.on_first_page() {
            LinkDescriptor::disabled_nav(Direction::Previous)
        } else {
            LinkDescriptor::nav(Direction::Previous, current_page - 1, urls.url(current_page - 1))
        }
    }

    fn next<U: PageUrl + ?Sized>(&self, urls: &LinkUrls<U>) -> LinkDescriptor {
        let enabled = match self.next_rule {
            NextRule::BeforeLastPage => !self.state.on_last_page(),
            NextRule::MirrorPrevious => !self.state.on_first_page(),
        };

        match self.state.current_page().checked_add(1) {
            Some(target_page) if enabled => {
                LinkDescriptor::nav(Direction::Next, target_page, urls.url(target_page))
            }
            _ => LinkDescriptor::disabled_nav(Direction::Next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{page_state::RequestedPage, query::QueryOverrides};
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq, Eq)]
    enum Shown {
        Page(Page),
        Current(Page),
        Dots,
    }

    fn shown(pagination: &Pagination) -> Vec<Shown> {
        pagination
            .iter()
            .map(|descriptor| match descriptor {
                LinkDescriptor::Page {
                    number,
                    is_current: true,
                    ..
                } => Shown::Current(*number),
                LinkDescriptor::Page { number, .. } => Shown::Page(*number),
                LinkDescriptor::Ellipsis => Shown::Dots,
                LinkDescriptor::Nav { .. } => panic!("navigation inside the page sequence"),
            })
            .collect_vec()
    }

    fn pages(range: impl IntoIterator<Item = Page>, current: Page) -> Vec<Shown> {
        range
            .into_iter()
            .map(|page| {
                if page == current {
                    Shown::Current(page)
                } else {
                    Shown::Page(page)
                }
            })
            .collect_vec()
    }

    fn render(current: Page, last: Page) -> Pagination {
        let state = PageState::resolve(RequestedPage::from(current), last, 1);
        let builder = |page: Page| format!("/?page={page}");
        let urls = LinkUrls::new(&builder, &QueryOverrides::new()).unwrap();

        WindowRenderer::new(state).render(&urls)
    }

    #[test]
    fn small_page_counts_show_every_page() {
        for last in 1..SLIDER_THRESHOLD {
            for current in 1..=last {
                let pagination = render(current, last);

                assert_eq!(shown(&pagination), pages(1..=last, current));
            }
        }
    }

    #[test]
    fn near_start_shows_the_first_eight_pages() {
        for current in 1..=EDGE_WINDOW {
            let mut expected = pages(1..=8, current);
            expected.push(Shown::Dots);
            expected.extend(pages(19..=20, current));

            assert_eq!(shown(&render(current, 20)), expected, "current page {current}");
        }
    }

    #[test]
    fn near_end_shows_the_last_nine_pages() {
        for current in 14..=20 {
            let mut expected = pages(1..=2, current);
            expected.push(Shown::Dots);
            expected.extend(pages(12..=20, current));

            assert_eq!(shown(&render(current, 20)), expected, "current page {current}");
        }
    }

    #[test]
    fn middle_pages_get_a_centered_window() {
        for current in 7..=13 {
            let mut expected = pages(1..=2, current);
            expected.push(Shown::Dots);
            expected.extend(pages(current - 3..=current + 3, current));
            expected.push(Shown::Dots);
            expected.extend(pages(19..=20, current));

            assert_eq!(shown(&render(current, 20)), expected, "current page {current}");
        }
    }

    #[test]
    fn thirteen_pages_switch_straight_from_start_to_end() {
        let mut expected = pages(1..=8, 6);
        expected.push(Shown::Dots);
        expected.extend(pages(12..=13, 6));
        assert_eq!(shown(&render(6, 13)), expected);

        let mut expected = pages(1..=2, 7);
        expected.push(Shown::Dots);
        expected.extend(pages(5..=13, 7));
        assert_eq!(shown(&render(7, 13)), expected);
    }

    #[test]
    fn no_items_render_no_pages() {
        let state = PageState::resolve(RequestedPage::Missing, 0, 10);
        let builder = |page: Page| format!("/?page={page}");
        let urls = LinkUrls::new(&builder, &QueryOverrides::new()).unwrap();

        for rule in [NextRule::BeforeLastPage, NextRule::MirrorPrevious] {
            let pagination = WindowRenderer::new(state).next_rule_set(rule).render(&urls);

            assert!(pagination.is_empty());
            assert_eq!(pagination.previous(), &LinkDescriptor::disabled_nav(Direction::Previous));
            assert_eq!(pagination.next(), &LinkDescriptor::disabled_nav(Direction::Next));
        }
    }

    #[test]
    fn previous_and_next_point_at_neighbours() {
        let pagination = render(5, 9);

        assert_eq!(
            pagination.previous(),
            &LinkDescriptor::nav(Direction::Previous, 4, "/?page=4".to_string())
        );
        assert_eq!(
            pagination.next(),
            &LinkDescriptor::nav(Direction::Next, 6, "/?page=6".to_string())
        );
    }

    #[test]
    fn next_is_disabled_on_the_last_page() {
        let pagination = render(9, 9);

        assert_eq!(pagination.next(), &LinkDescriptor::disabled_nav(Direction::Next));
    }

    #[test]
    fn mirrored_next_follows_the_previous_condition() {
        let state = PageState::resolve(RequestedPage::from(9_usize), 9, 1);
        let builder = |page: Page| format!("/?page={page}");
        let urls = LinkUrls::new(&builder, &QueryOverrides::new()).unwrap();
        let renderer = WindowRenderer::new(state).next_rule_set(NextRule::MirrorPrevious);

        assert_eq!(
            renderer.render(&urls).next(),
            &LinkDescriptor::nav(Direction::Next, 10, "/?page=10".to_string())
        );

        let state = PageState::resolve(RequestedPage::from(1_usize), 9, 1);
        let renderer = WindowRenderer::new(state).next_rule_set(NextRule::MirrorPrevious);

        assert_eq!(
            renderer.render(&urls).next(),
            &LinkDescriptor::disabled_nav(Direction::Next)
        );
    }

    #[test]
    fn invalid_requests_land_on_the_first_page() {
        let state = PageState::resolve("abc", 20, 2);
        let builder = |page: Page| format!("/?page={page}");
        let urls = LinkUrls::new(&builder, &QueryOverrides::new()).unwrap();
        let pagination = WindowRenderer::new(state).render(&urls);

        assert_eq!(*state.last_page(), 10);
        assert_eq!(shown(&pagination), pages(1..=10, 1));
        assert_eq!(pagination.previous(), &LinkDescriptor::disabled_nav(Direction::Previous));
        assert_eq!(
            pagination.next(),
            &LinkDescriptor::nav(Direction::Next, 2, "/?page=2".to_string())
        );
    }

    #[test]
    fn mirrored_next_is_disabled_past_the_largest_page() {
        let state = PageState::resolve("18446744073709551615", usize::MAX, 1);
        let builder = |page: Page| format!("/?page={page}");
        let urls = LinkUrls::new(&builder, &QueryOverrides::new()).unwrap();
        let renderer = WindowRenderer::new(state).next_rule_set(NextRule::MirrorPrevious);

        assert_eq!(*state.current_page(), usize::MAX);
        assert_eq!(
            renderer.render(&urls).next(),
            &LinkDescriptor::disabled_nav(Direction::Next)
        );
    }

    fn segments(shown: &[Shown]) -> Vec<Vec<Page>> {
        shown
            .split(|item| *item == Shown::Dots)
            .map(|run| {
                run.iter()
                    .filter_map(|item| match item {
                        Shown::Page(page) | Shown::Current(page) => Some(*page),
                        Shown::Dots => None,
                    })
                    .collect_vec()
            })
            .collect_vec()
    }

    #[test]
    fn slider_shape_holds_for_every_page() {
        for last in SLIDER_THRESHOLD..=60 {
            for current in 1..=last {
                let shown = shown(&render(current, last));
                let context = format!("page {current} of {last}");

                let current_pages = shown
                    .iter()
                    .filter(|item| matches!(item, Shown::Current(_)))
                    .collect_vec();
                assert_eq!(current_pages, vec![&Shown::Current(current)], "{context}");

                let segments = segments(&shown);
                assert!(
                    segments
                        .iter()
                        .flatten()
                        .tuple_windows()
                        .all(|(left, right)| left < right),
                    "{context}"
                );

                let expected = if current <= EDGE_WINDOW {
                    vec![(1..=8).collect_vec(), (last - 1..=last).collect_vec()]
                } else if current >= last - EDGE_WINDOW {
                    vec![(1..=2).collect_vec(), (last - 8..=last).collect_vec()]
                } else {
                    vec![
                        (1..=2).collect_vec(),
                        (current - ADJACENT_PAGES..=current + ADJACENT_PAGES).collect_vec(),
                        (last - 1..=last).collect_vec(),
                    ]
                };
                assert_eq!(segments, expected, "{context}");
            }
        }
    }
}
