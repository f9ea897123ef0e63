//! User-controlled view parameters of the project gallery.
//!
//! Every field of [`QueryState`] is a closed enum or an owned string, so a
//! query can never hold an "unset" value once constructed.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{domain::Tag, error::ParseValueError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TagFilter {
    #[default]
    All,
    Only(Tag),
}

impl TagFilter {
    /// Options in the order the filter selector lists them.
    pub const OPTIONS: [TagFilter; 5] = [
        TagFilter::All,
        TagFilter::Only(Tag::Html),
        TagFilter::Only(Tag::Css),
        TagFilter::Only(Tag::Js),
        TagFilter::Only(Tag::Design),
    ];

    pub fn label(self) -> &'static str {
        match self {
            TagFilter::All => "All",
            TagFilter::Only(tag) => tag.label(),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TagFilter {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TagFilter::All);
        }
        s.parse::<Tag>()
            .map(TagFilter::Only)
            .map_err(|_| ParseValueError::new("tag filter", s))
    }
}

impl From<TagFilter> for String {
    fn from(value: TagFilter) -> Self {
        value.label().to_string()
    }
}

impl TryFrom<String> for TagFilter {
    type Error = ParseValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Title ordering. Labels follow the page's "A-Z" / "Z-A" selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub const OPTIONS: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "A-Z",
            SortOrder::Descending => "Z-A",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOrder {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a-z" | "asc" | "ascending" => Ok(SortOrder::Ascending),
            "z-a" | "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ParseValueError::new("sort order", s)),
        }
    }
}

impl From<SortOrder> for String {
    fn from(value: SortOrder) -> Self {
        value.label().to_string()
    }
}

impl TryFrom<String> for SortOrder {
    type Error = ParseValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub const OPTIONS: [ViewMode; 2] = [ViewMode::Grid, ViewMode::List];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(ParseValueError::new("view mode", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryState {
    pub search_text: String,
    pub tag_filter: TagFilter,
    pub sort_order: SortOrder,
    pub view_mode: ViewMode,
}

impl QueryState {
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_tag_filter(mut self, tag_filter: TagFilter) -> Self {
        self.tag_filter = tag_filter;
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
