use impl_helper::ImplHelper;
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::Path};
use wrap_context::{arg_context, liab, raw_context};

use crate::{presenter::Labels, query::QueryOverrides, types::NextRule};

pub const DEFAULT_PER_PAGE: usize = 15;
pub const DEFAULT_PAGE_KEY: &str = "page";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ImplHelper)]
#[serde(default, deny_unknown_fields)]
pub struct Preferences {
    #[helper(all)]
    per_page: usize,

    /// Query parameter that carries the page number
    #[helper(all)]
    page_key: String,

    #[helper(all)]
    next_rule: NextRule,

    #[helper(all)]
    labels: Labels,

    #[helper(all)]
    query: QueryOverrides,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page_key: DEFAULT_PAGE_KEY.to_string(),
            next_rule: NextRule::default(),
            labels: Labels::default(),
            query: QueryOverrides::default(),
        }
    }
}

impl Preferences {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let reader = BufReader::new(arg_context!(File::open(path))?);
        let preferences: Self = raw_context!(serde_json::from_reader(reader))?;

        arg_context!(preferences.validate())?;

        anyhow::Ok(preferences)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let preferences: Self = arg_context!(serde_json::from_str(json))?;

        arg_context!(preferences.validate())?;

        anyhow::Ok(preferences)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.per_page == 0 {
            liab!("per_page must be at least 1");
        }

        if self.page_key.is_empty() {
            liab!("page_key must not be empty");
        }

        anyhow::Ok(())
    }
}
