use std::sync::Arc;

use serde::Serialize;
use shared::{Catalog, ProjectRecord, QueryState, SortOrder, TagFilter, ViewMode};
use tracing::debug;

use crate::pipeline;

pub const EMPTY_PLACEHOLDER: &str = "No projects match your search.";
pub const LINK_LABEL: &str = "View project ↗";
pub const SEARCH_PLACEHOLDER: &str = "Search projects...";
pub const GRID_MIN_COLUMN_WIDTH: f32 = 240.0;
pub const CARD_GAP: f32 = 16.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub href: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<CardLink>,
}

impl ProjectCard {
    fn from_record(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            link: record.url.as_ref().map(|href| CardLink {
                href: href.clone(),
                label: LINK_LABEL,
            }),
        }
    }
}

/// Either at least one card, or the single empty-state placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GalleryContent {
    Cards { cards: Vec<ProjectCard> },
    Placeholder { message: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryView {
    pub layout: ViewMode,
    pub content: GalleryContent,
}

impl GalleryView {
    pub fn cards(&self) -> &[ProjectCard] {
        match &self.content {
            GalleryContent::Cards { cards } => cards.as_slice(),
            GalleryContent::Placeholder { .. } => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, GalleryContent::Placeholder { .. })
    }
}

/// Lays out pipeline output as cards; never touches the query.
pub fn render<'a, I>(results: I, layout: ViewMode) -> GalleryView
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let cards: Vec<ProjectCard> = results.into_iter().map(ProjectCard::from_record).collect();
    let content = if cards.is_empty() {
        GalleryContent::Placeholder {
            message: EMPTY_PLACEHOLDER,
        }
    } else {
        GalleryContent::Cards { cards }
    };
    GalleryView { layout, content }
}

/// Columns a responsive grid fits into `available_width`; always at least one.
pub fn grid_columns(available_width: f32) -> usize {
    if !available_width.is_finite() || available_width <= GRID_MIN_COLUMN_WIDTH {
        return 1;
    }
    let fitted = ((available_width + CARD_GAP) / (GRID_MIN_COLUMN_WIDTH + CARD_GAP)).floor();
    (fitted as usize).max(1)
}

pub fn columns_for(layout: ViewMode, available_width: f32) -> usize {
    match layout {
        ViewMode::Grid => grid_columns(available_width),
        ViewMode::List => 1,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryInput {
    SearchText(String),
    TagFilter(TagFilter),
    SortOrder(SortOrder),
    ViewMode(ViewMode),
}

/// Project gallery: owns the query and the results derived from it.
#[derive(Debug, Clone)]
pub struct GalleryWidget {
    catalog: Arc<Catalog>,
    query: QueryState,
    visible: Vec<ProjectRecord>,
}

impl GalleryWidget {
    pub fn mount(catalog: Arc<Catalog>) -> Self {
        Self::with_query(catalog, QueryState::default())
    }

    pub fn with_query(catalog: Arc<Catalog>, query: QueryState) -> Self {
        let mut widget = Self {
            catalog,
            query,
            visible: Vec::new(),
        };
        widget.recompute();
        widget
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn results(&self) -> &[ProjectRecord] {
        &self.visible
    }

    /// Applies one input event. Returns `false` when it left the query unchanged.
    pub fn handle(&mut self, input: GalleryInput) -> bool {
        match input {
            GalleryInput::SearchText(text) => {
                if self.query.search_text == text {
                    return false;
                }
                self.query.search_text = text;
            }
            GalleryInput::TagFilter(tag_filter) => {
                if self.query.tag_filter == tag_filter {
                    return false;
                }
                self.query.tag_filter = tag_filter;
            }
            GalleryInput::SortOrder(sort_order) => {
                if self.query.sort_order == sort_order {
                    return false;
                }
                self.query.sort_order = sort_order;
            }
            GalleryInput::ViewMode(view_mode) => {
                // layout only; results are unaffected
                if self.query.view_mode == view_mode {
                    return false;
                }
                self.query.view_mode = view_mode;
                return true;
            }
        }
        self.recompute();
        true
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        self.handle(GalleryInput::SearchText(text.into()))
    }

    pub fn set_tag_filter(&mut self, tag_filter: TagFilter) -> bool {
        self.handle(GalleryInput::TagFilter(tag_filter))
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) -> bool {
        self.handle(GalleryInput::SortOrder(sort_order))
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) -> bool {
        self.handle(GalleryInput::ViewMode(view_mode))
    }

    pub fn render(&self) -> GalleryView {
        render(&self.visible, self.query.view_mode)
    }

    fn recompute(&mut self) {
        self.visible = pipeline::apply(self.catalog.iter(), &self.query)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            search = %self.query.search_text,
            tag_filter = %self.query.tag_filter,
            sort_order = %self.query.sort_order,
            matches = self.visible.len(),
            "recomputed project gallery"
        );
    }
}

#[cfg(test)]
#[path = "tests/gallery_tests.rs"]
mod tests;
