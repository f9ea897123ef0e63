//! Dismissible welcome banner backed by one persisted flag.

use std::sync::Arc;

use serde::Serialize;
use storage::KeyValueStore;
use tracing::{info, warn};

pub const BANNER_STORAGE_KEY: &str = "bannerDismissed";
pub const DISMISSED_SENTINEL: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Shown,
    /// Terminal for the session.
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerView {
    pub headline: &'static str,
    pub message: &'static str,
    pub dismiss_label: &'static str,
}

impl Default for BannerView {
    fn default() -> Self {
        Self {
            headline: "Welcome!",
            message: "This page now has project search, filters, and a back-to-top button.",
            dismiss_label: "Dismiss",
        }
    }
}

pub struct BannerWidget {
    store: Arc<dyn KeyValueStore>,
    state: BannerState,
}

impl BannerWidget {
    /// Reads the flag once. A failing store reads as "not dismissed".
    pub fn mount(store: Arc<dyn KeyValueStore>) -> Self {
        let state = match store.get(BANNER_STORAGE_KEY) {
            Ok(Some(value)) if value == DISMISSED_SENTINEL => BannerState::Dismissed,
            Ok(_) => BannerState::Shown,
            Err(err) => {
                warn!(error = %err, "banner flag unreadable; showing banner");
                BannerState::Shown
            }
        };
        Self { store, state }
    }

    pub fn state(&self) -> BannerState {
        self.state
    }

    pub fn is_dismissed(&self) -> bool {
        self.state == BannerState::Dismissed
    }

    /// Persists the sentinel, then hides the banner. Returns `false` if already dismissed.
    pub fn dismiss(&mut self) -> bool {
        if self.state == BannerState::Dismissed {
            return false;
        }
        if let Err(err) = self.store.set(BANNER_STORAGE_KEY, DISMISSED_SENTINEL) {
            warn!(error = %err, "failed to persist banner dismissal; hiding for this session only");
        }
        self.state = BannerState::Dismissed;
        info!("welcome banner dismissed");
        true
    }

    pub fn render(&self) -> Option<BannerView> {
        match self.state {
            BannerState::Shown => Some(BannerView::default()),
            BannerState::Dismissed => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/banner_tests.rs"]
mod tests;
