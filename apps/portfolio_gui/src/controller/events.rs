//! Input events the UI layer queues during a frame.

use shared::{SortOrder, TagFilter, ViewMode};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SearchChanged(String),
    TagFilterSelected(TagFilter),
    SortOrderSelected(SortOrder),
    ViewModeSelected(ViewMode),
    DismissBanner,
    BackToTopClicked,
    Scrolled(f32),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::SearchChanged(_) => "search_changed",
            UiEvent::TagFilterSelected(_) => "tag_filter_selected",
            UiEvent::SortOrderSelected(_) => "sort_order_selected",
            UiEvent::ViewModeSelected(_) => "view_mode_selected",
            UiEvent::DismissBanner => "dismiss_banner",
            UiEvent::BackToTopClicked => "back_to_top_clicked",
            UiEvent::Scrolled(_) => "scrolled",
        }
    }
}
