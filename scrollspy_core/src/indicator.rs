// Scroll-to-top button visibility. Pure threshold, no hysteresis.

use tracing::debug;

/// Visible at or past the threshold.
pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y >= threshold
}

/// Tracks the scroll-to-top flag and reports flips.
#[derive(Debug, Clone)]
pub struct ScrollTopIndicator {
    threshold: f64,
    visible: bool,
}

impl ScrollTopIndicator {
    pub fn new(threshold: f64) -> Self {
        ScrollTopIndicator {
            threshold,
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the new visibility only when it flipped.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let visible = scroll_top_visible(scroll_y, self.threshold);
        if visible == self.visible {
            return None;
        }
        debug!(visible, scroll_y, "scroll-to-top visibility changed");
        self.visible = visible;
        Some(visible)
    }
}
