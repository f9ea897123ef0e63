use super::*;

use std::sync::Arc;

use shared::{Catalog, SortOrder, Tag, TagFilter, ViewMode};
use storage::{KeyValueStore, MemoryStore};
use widget_core::{
    page::PROJECTS_MOUNT_POINT, MountPoints, PageEnvironment, ScrollBehavior, ScrollVisibility,
    BANNER_STORAGE_KEY,
};

fn mounted(mount_points: &MountPoints) -> (PortfolioPage, PageEnvironment, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let env = PageEnvironment {
        catalog: Arc::new(Catalog::sample()),
        store: store.clone(),
        scroll: ScrollEvents::new(0.0),
    };
    (PortfolioPage::mount(mount_points, &env), env, store)
}

fn gallery_titles(page: &PortfolioPage) -> Vec<String> {
    page.gallery
        .as_ref()
        .expect("gallery mounted")
        .results()
        .iter()
        .map(|project| project.title.clone())
        .collect()
}

#[test]
fn gallery_events_update_query_and_results() {
    let (mut page, env, _) = mounted(&MountPoints::all());

    assert!(apply_ui_event(
        &mut page,
        &env.scroll,
        UiEvent::TagFilterSelected(TagFilter::Only(Tag::Js))
    ));
    assert!(apply_ui_event(
        &mut page,
        &env.scroll,
        UiEvent::SortOrderSelected(SortOrder::Descending)
    ));
    assert_eq!(gallery_titles(&page), ["Todo App", "Simple Calculator"]);

    assert!(apply_ui_event(
        &mut page,
        &env.scroll,
        UiEvent::SearchChanged("calc".into())
    ));
    assert_eq!(gallery_titles(&page), ["Simple Calculator"]);

    assert!(apply_ui_event(
        &mut page,
        &env.scroll,
        UiEvent::ViewModeSelected(ViewMode::List)
    ));
    assert!(!apply_ui_event(
        &mut page,
        &env.scroll,
        UiEvent::ViewModeSelected(ViewMode::List)
    ));
}

#[test]
fn dismiss_event_persists_flag() {
    let (mut page, env, store) = mounted(&MountPoints::all());
    assert!(apply_ui_event(&mut page, &env.scroll, UiEvent::DismissBanner));
    assert!(!apply_ui_event(&mut page, &env.scroll, UiEvent::DismissBanner));
    assert_eq!(
        store.get(BANNER_STORAGE_KEY).expect("get").as_deref(),
        Some("1")
    );
}

#[test]
fn scroll_events_drive_back_to_top() {
    let (mut page, env, _) = mounted(&MountPoints::all());

    assert!(!apply_ui_event(&mut page, &env.scroll, UiEvent::BackToTopClicked));

    apply_ui_event(&mut page, &env.scroll, UiEvent::Scrolled(820.0));
    assert_eq!(
        page.back_to_top.as_ref().expect("button").visibility(),
        ScrollVisibility::Visible
    );

    assert!(apply_ui_event(&mut page, &env.scroll, UiEvent::BackToTopClicked));
    let request = env.scroll.take_scroll_request().expect("scroll request");
    assert_eq!(request.target, 0.0);
    assert_eq!(request.behavior, ScrollBehavior::Smooth);
}

#[test]
fn events_for_unmounted_widgets_are_ignored() {
    let (mut page, env, store) = mounted(&MountPoints::new([PROJECTS_MOUNT_POINT]));

    assert!(!apply_ui_event(&mut page, &env.scroll, UiEvent::DismissBanner));
    assert_eq!(store.get(BANNER_STORAGE_KEY).expect("get"), None);

    apply_ui_event(&mut page, &env.scroll, UiEvent::Scrolled(900.0));
    assert!(!apply_ui_event(&mut page, &env.scroll, UiEvent::BackToTopClicked));
    assert_eq!(env.scroll.take_scroll_request(), None);
}
