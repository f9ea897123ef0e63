//! Routes queued UI events to the widget that owns the affected state.

use widget_core::{BackToTopWidget, BannerWidget, PortfolioPage, ScrollEvents};

use crate::controller::events::UiEvent;

/// Returns whether the event changed any widget state. Events aimed at an
/// unmounted widget are dropped.
pub fn apply_ui_event(page: &mut PortfolioPage, scroll: &ScrollEvents, event: UiEvent) -> bool {
    let name = event.name();
    let changed = match event {
        UiEvent::SearchChanged(text) => page
            .gallery
            .as_mut()
            .is_some_and(|gallery| gallery.set_search_text(text)),
        UiEvent::TagFilterSelected(tag_filter) => page
            .gallery
            .as_mut()
            .is_some_and(|gallery| gallery.set_tag_filter(tag_filter)),
        UiEvent::SortOrderSelected(sort_order) => page
            .gallery
            .as_mut()
            .is_some_and(|gallery| gallery.set_sort_order(sort_order)),
        UiEvent::ViewModeSelected(view_mode) => page
            .gallery
            .as_mut()
            .is_some_and(|gallery| gallery.set_view_mode(view_mode)),
        UiEvent::DismissBanner => page.banner.as_mut().is_some_and(BannerWidget::dismiss),
        UiEvent::BackToTopClicked => page
            .back_to_top
            .as_ref()
            .is_some_and(BackToTopWidget::activate),
        UiEvent::Scrolled(offset) => {
            scroll.dispatch(offset);
            true
        }
    };
    if name != "scrolled" {
        tracing::debug!(event = name, changed, "applied ui event");
    }
    changed
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
