use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{ProjectRecord, Tag},
    error::CatalogError,
};

/// Read-only, ordered list of projects shown in the gallery.
///
/// Titles are non-empty and unique; any `url` present parses as an absolute URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, project) in projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            if !seen.insert(project.title.as_str()) {
                return Err(CatalogError::DuplicateTitle {
                    title: project.title.clone(),
                });
            }
            if let Some(url) = &project.url {
                url::Url::parse(url).map_err(|source| CatalogError::InvalidUrl {
                    title: project.title.clone(),
                    url: url.clone(),
                    source,
                })?;
            }
        }
        Ok(Self { projects })
    }

    /// The four projects the portfolio page ships with.
    pub fn sample() -> Self {
        Self {
            projects: vec![
                ProjectRecord::new(
                    "Portfolio Website",
                    [Tag::Html, Tag::Css],
                    "Polished portfolio using semantic HTML and CSS.",
                ),
                ProjectRecord::new(
                    "Simple Calculator",
                    [Tag::Js],
                    "Calculator built with HTML, CSS, and JavaScript.",
                ),
                ProjectRecord::new(
                    "E-commerce Hero Mock",
                    [Tag::Design],
                    "Static watch store landing hero.",
                ),
                ProjectRecord::new("Todo App", [Tag::Js], "CRUD todos with localStorage."),
            ],
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::new(file.projects)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.projects)
    }

    /// Loads a `.toml` or `.json` catalog file, picking the format by extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if extension != "toml" && extension != "json" {
            return Err(CatalogError::UnsupportedFormat { extension });
        }

        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if extension == "toml" {
            Self::from_toml_str(&raw)
        } else {
            Self::from_json_str(&raw)
        }
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find(&self, title: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.title == title)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
