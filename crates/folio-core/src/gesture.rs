//! Swipe-to-close gesture on the modal.

/// What a completed touch means for the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Close,
    Ignore,
}

/// Tracks one touch from `touchstart` to `touchend` by screen Y.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    start_y: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_y: None,
        }
    }

    pub fn touch_start(&mut self, screen_y: f64) {
        self.start_y = Some(screen_y);
    }

    /// Finish the gesture. Only a downward move strictly beyond the threshold
    /// closes; an end without a start is ignored.
    pub fn touch_end(&mut self, screen_y: f64) -> SwipeOutcome {
        let Some(start) = self.start_y.take() else {
            return SwipeOutcome::Ignore;
        };
        if screen_y - start > self.threshold {
            SwipeOutcome::Close
        } else {
            SwipeOutcome::Ignore
        }
    }
}
