//! Scroll-offset channel between the host and the back-to-top widget.
//!
//! Everything here lives on the host's UI thread, hence `Rc`/`Cell` rather
//! than atomics. Listener registration is scoped: a [`ScrollSubscription`]
//! unregisters its listener when dropped.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::{Rc, Weak},
};

use serde::Serialize;
use tracing::debug;

/// Offset (px from top) the page must pass, exclusively, before the button shows.
pub const BACK_TO_TOP_THRESHOLD: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollVisibility {
    Visible,
    Hidden,
}

impl ScrollVisibility {
    pub fn for_offset(offset: f32) -> Self {
        if offset > BACK_TO_TOP_THRESHOLD {
            ScrollVisibility::Visible
        } else {
            ScrollVisibility::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        self == ScrollVisibility::Visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub target: f32,
    pub behavior: ScrollBehavior,
}

type ScrollListener = Box<dyn FnMut(f32)>;

struct ListenerEntry {
    released: Rc<Cell<bool>>,
    listener: ScrollListener,
}

#[derive(Default)]
struct Registry {
    offset: f32,
    next_id: u64,
    listeners: BTreeMap<u64, ListenerEntry>,
    pending_request: Option<ScrollRequest>,
}

/// Host side of scrolling: the current offset, scroll listeners, and the
/// scroll-to requests widgets leave for the host to carry out.
#[derive(Clone, Default)]
pub struct ScrollEvents {
    inner: Rc<RefCell<Registry>>,
}

impl ScrollEvents {
    pub fn new(initial_offset: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                offset: initial_offset,
                ..Registry::default()
            })),
        }
    }

    pub fn offset(&self) -> f32 {
        self.inner.borrow().offset
    }

    pub fn subscribe(&self, listener: impl FnMut(f32) + 'static) -> ScrollSubscription {
        let released = Rc::new(Cell::new(false));
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(
            id,
            ListenerEntry {
                released: Rc::clone(&released),
                listener: Box::new(listener),
            },
        );
        ScrollSubscription {
            registry: Rc::downgrade(&self.inner),
            id,
            released,
        }
    }

    /// Records a new offset and notifies every listener with it.
    ///
    /// Each listener is taken out of the registry while it runs, so it may
    /// subscribe, unsubscribe or dispatch again. Released entries are dropped
    /// with no registry borrow held.
    pub fn dispatch(&self, offset: f32) {
        let ids: Vec<u64> = {
            let mut registry = self.inner.borrow_mut();
            registry.offset = offset;
            registry.listeners.keys().copied().collect()
        };

        for id in ids {
            let taken = self.inner.borrow_mut().listeners.remove(&id);
            // already running further up the stack, or gone
            let Some(mut entry) = taken else {
                continue;
            };
            if entry.released.get() {
                continue;
            }
            (entry.listener)(offset);
            if !entry.released.get() {
                self.inner.borrow_mut().listeners.insert(id, entry);
            }
        }
    }

    /// Fire-and-forget: the host picks the request up on its next frame.
    pub fn request_scroll_to(&self, target: f32, behavior: ScrollBehavior) {
        debug!(target_offset = target, ?behavior, "scroll requested");
        self.inner.borrow_mut().pending_request = Some(ScrollRequest { target, behavior });
    }

    pub fn take_scroll_request(&self) -> Option<ScrollRequest> {
        self.inner.borrow_mut().pending_request.take()
    }

    /// Live listeners, including one currently running inside `dispatch`.
    pub fn listener_count(&self) -> usize {
        self.inner
            .borrow()
            .listeners
            .values()
            .filter(|entry| !entry.released.get())
            .count()
    }
}

/// Registration handle for a scroll listener; dropping it unregisters the listener.
#[must_use = "dropping the subscription unregisters the listener immediately"]
pub struct ScrollSubscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
    released: Rc<Cell<bool>>,
}

impl ScrollSubscription {
    pub fn unsubscribe(self) {}
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.released.set(true);
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // a busy registry skips the released entry on the next dispatch
        let removed = match registry.try_borrow_mut() {
            Ok(mut registry) => registry.listeners.remove(&self.id),
            Err(_) => None,
        };
        // the listener may own other subscriptions; drop it unborrowed
        drop(removed);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackToTopView {
    pub icon: &'static str,
    pub label: &'static str,
    pub right_margin: f32,
    pub bottom_margin: f32,
}

impl Default for BackToTopView {
    fn default() -> Self {
        Self {
            icon: "⬆",
            label: "Back to top",
            right_margin: 16.0,
            bottom_margin: 24.0,
        }
    }
}

pub struct BackToTopWidget {
    host: ScrollEvents,
    visibility: Rc<Cell<ScrollVisibility>>,
    _subscription: ScrollSubscription,
}

impl BackToTopWidget {
    /// Subscribes to scroll events and evaluates the current offset right away.
    pub fn mount(host: &ScrollEvents) -> Self {
        let visibility = Rc::new(Cell::new(ScrollVisibility::for_offset(host.offset())));
        let tracked = Rc::clone(&visibility);
        let subscription =
            host.subscribe(move |offset| tracked.set(ScrollVisibility::for_offset(offset)));
        Self {
            host: host.clone(),
            visibility,
            _subscription: subscription,
        }
    }

    pub fn visibility(&self) -> ScrollVisibility {
        self.visibility.get()
    }

    pub fn render(&self) -> Option<BackToTopView> {
        self.visibility()
            .is_visible()
            .then(BackToTopView::default)
    }

    /// Requests a smooth scroll to the top. No-op while hidden.
    pub fn activate(&self) -> bool {
        if !self.visibility().is_visible() {
            return false;
        }
        self.host.request_scroll_to(0.0, ScrollBehavior::Smooth);
        true
    }

    pub fn unmount(self) {}
}

#[cfg(test)]
#[path = "tests/scroll_tests.rs"]
mod tests;
