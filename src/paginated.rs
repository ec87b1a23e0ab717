use impl_helper::ImplHelper;
use std::{ops::Index, slice, vec};
use wrap_context::raw_context;

use crate::{
    descriptor::Pagination,
    page_state::{PageState, RequestedPage},
    query::{LinkUrls, PageUrl, QueryOverrides},
    types::NextRule,
    window::WindowRenderer,
};

/// Items of the current page together with where that page sits
#[derive(Debug, Clone, PartialEq, Eq, ImplHelper)]
pub struct Paginated<T> {
    items: Vec<T>,

    #[helper(get)]
    state: PageState,

    #[helper(get)]
    query: QueryOverrides,
}

impl<T> Paginated<T> {
    /// `items` are the items of the current page only
    pub fn new(items: Vec<T>, state: PageState) -> Self {
        Self {
            items,
            state,
            query: QueryOverrides::default(),
        }
    }

    /// Cuts the requested page out of the whole collection
    ///
    /// # Panics
    ///
    /// When `per_page` is zero.
    pub fn make<'a>(
        mut all_items: Vec<T>,
        requested: impl Into<RequestedPage<'a>>,
        per_page: usize,
    ) -> Self {
        let state = PageState::resolve(requested, all_items.len(), per_page);
        let range = state.item_range();

        all_items.truncate(range.end);
        let items = all_items.split_off(range.start);

        Self::new(items, state)
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key, value);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn links<U: PageUrl + ?Sized>(
        &self,
        next_rule: NextRule,
        builder: &U,
    ) -> anyhow::Result<Pagination> {
        let urls = raw_context!(LinkUrls::new(builder, &self.query))?;

        anyhow::Ok(
            WindowRenderer::new(self.state)
                .next_rule_set(next_rule)
                .render(&urls),
        )
    }
}

impl<T> Index<usize> for Paginated<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Paginated<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{descriptor::LinkDescriptor, query::QueryPageUrl, types::Direction};
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    #[test]
    fn make_keeps_only_the_current_page() {
        let paginated = Paginated::make((1..=25).collect_vec(), "3", 10);

        assert_eq!(paginated.items(), &[21, 22, 23, 24, 25]);
        assert_eq!(paginated.len(), 5);
        assert_eq!(paginated[0], 21);
        assert_eq!(paginated.get(5), None);
        assert_eq!(*paginated.state().current_page(), 3);
    }

    #[test]
    fn make_degrades_bad_pages() {
        let paginated = Paginated::make((1..=25).collect_vec(), "nope", 10);
        assert_eq!(paginated.iter().copied().collect_vec(), (1..=10).collect_vec());

        let paginated = Paginated::make((1..=25).collect_vec(), "40", 10);
        assert_eq!(paginated.into_iter().collect_vec(), (21..=25).collect_vec());
    }

    #[test]
    fn make_handles_an_empty_collection() {
        let paginated = Paginated::make(Vec::<u8>::new(), "2", 10);

        assert!(paginated.is_empty());
        assert_eq!(*paginated.state().last_page(), 0);
    }

    #[test]
    fn links_carry_the_query_overrides() {
        let paginated = Paginated::make((1..=30).collect_vec(), "2", 10)
            .with_query("sort", "name")
            .with_query("dir", "asc");
        let builder = QueryPageUrl::new("/users", "page");

        let pagination = paginated
            .links(NextRule::BeforeLastPage, &builder)
            .unwrap();

        assert_eq!(
            pagination.previous(),
            &LinkDescriptor::nav(
                Direction::Previous,
                1,
                "/users?page=1&sort=name&dir=asc".to_string()
            )
        );
        assert_eq!(pagination[1], LinkDescriptor::current(2));
    }
}
