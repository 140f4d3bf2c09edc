//! Scroll-triggered reveal
//!
//! Two trigger rules:
//! - [`RevealMode::Threshold`] (`.reveal` -> `active`): the element's top edge
//!   is above `reveal_ratio` of the viewport height.
//! - [`RevealMode::Intersect`] (`.animate-on-scroll` -> `is-visible`): at least
//!   `intersect_threshold` of the element's height is inside the viewport.
//!
//! Either way the state is one-way: once revealed, always revealed.

use crate::config::SiteConfig;

/// Which trigger rule an element uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    #[default]
    Threshold,
    Intersect,
}

impl RevealMode {
    /// Class the element always carries.
    pub fn base_class(self) -> &'static str {
        match self {
            RevealMode::Threshold => "reveal",
            RevealMode::Intersect => "animate-on-scroll",
        }
    }

    /// Class added once revealed.
    pub fn revealed_class(self) -> &'static str {
        match self {
            RevealMode::Threshold => "active",
            RevealMode::Intersect => "is-visible",
        }
    }
}

/// Fraction of an element's height (`top`..`bottom`, viewport coordinates)
/// that lies inside a viewport of height `viewport_height`.
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        // zero-height elements count as fully visible while inside the viewport
        return if top >= 0.0 && top <= viewport_height {
            1.0
        } else {
            0.0
        };
    }
    let overlap = bottom.min(viewport_height) - top.max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

/// Reveal state of one element.
#[derive(Debug, Clone)]
pub struct RevealState {
    mode: RevealMode,
    ratio: f64,
    threshold: f64,
    revealed: bool,
}

impl RevealState {
    pub fn new(mode: RevealMode, site: &SiteConfig) -> Self {
        Self {
            mode,
            ratio: site.reveal_ratio,
            threshold: site.intersect_threshold,
            revealed: false,
        }
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Check the element's current geometry. Returns `true` only on the call
    /// that flips it to revealed; afterwards the geometry is ignored.
    pub fn observe(&mut self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        if self.revealed {
            return false;
        }
        let crossed = match self.mode {
            RevealMode::Threshold => top < viewport_height * self.ratio,
            RevealMode::Intersect => {
                visible_fraction(top, bottom, viewport_height) >= self.threshold
            }
        };
        if crossed {
            self.revealed = true;
        }
        crossed
    }

    /// Full class attribute for the element.
    pub fn class(&self) -> String {
        if self.revealed {
            format!("{} {}", self.mode.base_class(), self.mode.revealed_class())
        } else {
            self.mode.base_class().to_string()
        }
    }
}
