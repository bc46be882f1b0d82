//! Rotating headline carousel for the hero panel.

use std::time::{Duration, Instant};

/// Cycles through the configured headlines on a fixed interval.
#[derive(Debug)]
pub struct HeadlineCarousel {
    items: Vec<String>,
    active: usize,
    interval: Duration,
    last_rotate: Instant,
}

impl HeadlineCarousel {
    /// Build a carousel over `items`, rotating every `interval`.
    pub fn new(items: Vec<String>, interval: Duration) -> Self {
        Self {
            items,
            active: 0,
            interval,
            last_rotate: Instant::now(),
        }
    }

    /// The headline currently shown, if any are configured.
    pub fn current(&self) -> Option<&str> {
        self.items.get(self.active).map(String::as_str)
    }

    /// Advance to the next headline once per interval, wrapping around.
    pub fn maybe_advance(&mut self, now: Instant) {
        if self.items.is_empty() {
            return;
        }
        if now.duration_since(self.last_rotate) >= self.interval {
            self.active = (self.active + 1) % self.items.len();
            self.last_rotate = now;
        }
    }
}
