use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use wrap_context::raw_context;

use crate::types::Page;

/// Extra query string values appended to every page url, in insertion order
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryOverrides(IndexMap<String, String>);

impl QueryOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// A key that is already present keeps its position and takes the new value
    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// `application/x-www-form-urlencoded` form of the overrides, without a leading `?`
    pub fn encode(&self) -> anyhow::Result<String> {
        let pairs = self.iter().collect_vec();
        let encoded = raw_context!(serde_urlencoded::to_string(pairs))?;

        anyhow::Ok(encoded)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryOverrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        overrides.extend(iter);
        overrides
    }
}

impl<K, V> Extend<(K, V)> for QueryOverrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Caller supplied url for a page. Must be total for every page >= 1.
pub trait PageUrl {
    fn page_url(&self, page: Page) -> String;
}

impl<F> PageUrl for F
where
    F: Fn(Page) -> String,
{
    fn page_url(&self, page: Page) -> String {
        self(page)
    }
}

fn query_separator(url: &str) -> char {
    if url.contains('?') {
        '&'
    } else {
        '?'
    }
}

/// Carries the page in a query parameter: `base?page=3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPageUrl {
    base: String,
    key: String,
}

impl QueryPageUrl {
    pub fn new(base: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            key: key.into(),
        }
    }
}

impl PageUrl for QueryPageUrl {
    fn page_url(&self, page: Page) -> String {
        format!(
            "{}{}{}={}",
            self.base,
            query_separator(&self.base),
            self.key,
            page
        )
    }
}

/// Page urls with the overrides appended
#[derive(Debug)]
pub struct LinkUrls<'a, U: ?Sized> {
    builder: &'a U,
    suffix: String,
}

impl<'a, U: PageUrl + ?Sized> LinkUrls<'a, U> {
    pub fn new(builder: &'a U, overrides: &QueryOverrides) -> anyhow::Result<Self> {
        let suffix = raw_context!(overrides.encode())?;

        anyhow::Ok(Self { builder, suffix })
    }

    pub fn url(&self, page: Page) -> String {
        let url = self.builder.page_url(page);

        if self.suffix.is_empty() {
            url
        } else {
            format!("{}{}{}", url, query_separator(&url), self.suffix)
        }
    }
}
