use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 1-based page number
pub type Page = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Previous,
    Next,
}

/// When the "next" control is enabled
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NextRule {
    /// Enabled while the current page is before the last one
    #[default]
    BeforeLastPage,

    /// Enabled on the same condition as "previous" (current page > 1)
    MirrorPrevious,
}
