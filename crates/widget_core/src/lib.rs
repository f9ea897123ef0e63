//! Host-agnostic state and render models for the portfolio page widgets.
//!
//! Each widget owns its state privately and is driven synchronously from the
//! host's input handlers; hosts turn the returned view models into pixels.

pub mod banner;
pub mod gallery;
pub mod page;
pub mod pipeline;
pub mod scroll;

pub use banner::{BannerState, BannerView, BannerWidget, BANNER_STORAGE_KEY, DISMISSED_SENTINEL};
pub use gallery::{GalleryContent, GalleryInput, GalleryView, GalleryWidget, ProjectCard};
pub use page::{MountPoints, PageEnvironment, PageView, PortfolioPage};
pub use scroll::{
    BackToTopView, BackToTopWidget, ScrollBehavior, ScrollEvents, ScrollRequest,
    ScrollSubscription, ScrollVisibility, BACK_TO_TOP_THRESHOLD,
};
