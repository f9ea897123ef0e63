use std::{collections::BTreeSet, sync::Arc};

use serde::Serialize;
use shared::Catalog;
use storage::KeyValueStore;
use tracing::{debug, info};

use crate::{
    banner::{BannerView, BannerWidget},
    gallery::{GalleryView, GalleryWidget},
    scroll::{BackToTopView, BackToTopWidget, ScrollEvents},
};

pub const BANNER_MOUNT_POINT: &str = "react-banner-root";
pub const PROJECTS_MOUNT_POINT: &str = "projects-root";
pub const BACK_TO_TOP_MOUNT_POINT: &str = "react-root";
pub const DEFAULT_MOUNT_POINTS: [&str; 3] = [
    BANNER_MOUNT_POINT,
    PROJECTS_MOUNT_POINT,
    BACK_TO_TOP_MOUNT_POINT,
];

/// Insertion points the host page exposes, by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountPoints {
    ids: BTreeSet<String>,
}

impl MountPoints {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn all() -> Self {
        Self::new(DEFAULT_MOUNT_POINTS)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Runs `mount` only when `id` exists; an absent point skips the widget silently.
    pub fn mount<W>(&self, id: &str, mount: impl FnOnce() -> W) -> Option<W> {
        if self.contains(id) {
            info!(mount_point = id, "mounting widget");
            Some(mount())
        } else {
            debug!(mount_point = id, "mount point absent; widget skipped");
            None
        }
    }
}

/// Capabilities the host hands to the widgets at mount time.
#[derive(Clone)]
pub struct PageEnvironment {
    pub catalog: Arc<Catalog>,
    pub store: Arc<dyn KeyValueStore>,
    pub scroll: ScrollEvents,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub banner: Option<BannerView>,
    pub gallery: Option<GalleryView>,
    pub back_to_top: Option<BackToTopView>,
}

/// The three independent widgets of the portfolio page.
pub struct PortfolioPage {
    pub banner: Option<BannerWidget>,
    pub gallery: Option<GalleryWidget>,
    pub back_to_top: Option<BackToTopWidget>,
}

impl PortfolioPage {
    pub fn mount(mount_points: &MountPoints, env: &PageEnvironment) -> Self {
        Self {
            banner: mount_points.mount(BANNER_MOUNT_POINT, || {
                BannerWidget::mount(Arc::clone(&env.store))
            }),
            gallery: mount_points.mount(PROJECTS_MOUNT_POINT, || {
                GalleryWidget::mount(Arc::clone(&env.catalog))
            }),
            back_to_top: mount_points.mount(BACK_TO_TOP_MOUNT_POINT, || {
                BackToTopWidget::mount(&env.scroll)
            }),
        }
    }

    pub fn render(&self) -> PageView {
        PageView {
            banner: self.banner.as_ref().and_then(BannerWidget::render),
            gallery: self.gallery.as_ref().map(GalleryWidget::render),
            back_to_top: self.back_to_top.as_ref().and_then(BackToTopWidget::render),
        }
    }

    /// Tears every widget down, releasing the scroll subscription.
    pub fn unmount(self) {
        info!("unmounting portfolio page");
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
