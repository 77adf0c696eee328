//! "Load more" trigger for infinite scrolling.
//!
//! Evaluated on every scroll event. Re-armable: after firing it stays quiet
//! until the page it requested has arrived, so a burst of scroll events
//! near the bottom requests one page, not one per event.

/// Scroll position of the result list, in rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Visible rows.
    pub viewport_height: usize,
    /// First visible row.
    pub scroll_offset: usize,
    /// Total rows of content.
    pub content_height: usize,
}

impl ScrollMetrics {
    /// Whether the bottom of the viewport is within `threshold` rows of the
    /// end of the content.
    pub fn is_near_bottom(&self, threshold: usize) -> bool {
        self.viewport_height + self.scroll_offset + threshold >= self.content_height
    }
}

/// Fires once per armed period when scrolled near the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTrigger {
    threshold: usize,
    armed: bool,
}

impl ScrollTrigger {
    /// Disarmed trigger with a near-bottom `threshold` in rows.
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            armed: false,
        }
    }

    /// Allow the next near-bottom scroll to fire.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Suppress firing until re-armed.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Whether the trigger can fire.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Near-bottom threshold in rows.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Report a scroll event. Returns true (and disarms) if it fires.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if self.armed && metrics.is_near_bottom(self.threshold) {
            self.armed = false;
            true
        } else {
            false
        }
    }
}
