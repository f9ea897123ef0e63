//! UI layer: app shell, page panels, smooth-scroll animation, and colours.

pub mod app;
pub mod panels;
pub mod scroll_animation;
pub mod theme;

pub use app::PortfolioApp;
