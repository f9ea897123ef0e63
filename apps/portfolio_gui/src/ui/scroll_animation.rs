//! Host-side smooth scrolling for widget scroll requests.

use widget_core::{ScrollBehavior, ScrollRequest};

pub const SMOOTH_SCROLL_SECONDS: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: f64,
    duration: f64,
}

impl ScrollAnimation {
    pub fn start(request: ScrollRequest, from: f32, now: f64) -> Self {
        let duration = match request.behavior {
            ScrollBehavior::Smooth => SMOOTH_SCROLL_SECONDS,
            ScrollBehavior::Instant => 0.0,
        };
        Self {
            from,
            to: request.target,
            started_at: now,
            duration,
        }
    }

    /// Ease-out cubic between the start offset and the target.
    pub fn offset_at(&self, now: f64) -> f32 {
        let progress = self.progress(now);
        let eased = 1.0 - (1.0 - progress).powi(3);
        self.from + (self.to - self.from) * eased as f32
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../tests/scroll_animation_tests.rs"]
mod tests;
