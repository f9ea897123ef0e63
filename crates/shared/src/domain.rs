use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseValueError;

/// Closed tag vocabulary used to label projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    #[serde(rename = "JS")]
    Js,
    #[serde(rename = "Design")]
    Design,
}

impl Tag {
    pub const ALL: [Tag; 4] = [Tag::Html, Tag::Css, Tag::Js, Tag::Design];

    pub fn label(self) -> &'static str {
        match self {
            Tag::Html => "HTML",
            Tag::Css => "CSS",
            Tag::Js => "JS",
            Tag::Design => "Design",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tag {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Tag::ALL
            .into_iter()
            .find(|tag| tag.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseValueError::new("tag", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    #[serde(default, alias = "stack")]
    pub tags: BTreeSet<Tag>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProjectRecord {
    pub fn new(
        title: impl Into<String>,
        tags: impl IntoIterator<Item = Tag>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tags: tags.into_iter().collect(),
            description: description.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}
