//! Scripted page transition
//!
//! Clicking the hero's scroll-down arrow fades the page out and, after the
//! fade has played, performs a full navigation to the configured document.

use crate::config::SiteConfig;

/// What the caller must do to run the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPlan {
    /// Class to add to `<body>` right away
    pub body_class: &'static str,
    /// Wait this long (ms) before navigating
    pub delay_ms: u32,
    /// Full-page navigation target
    pub target: String,
}

/// Page transition trigger. Fires at most once per page.
#[derive(Debug, Clone)]
pub struct PageTransition {
    delay_ms: u32,
    target: String,
    fired: bool,
}

impl PageTransition {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            delay_ms: site.page_transition_ms,
            target: site.transition_target.clone(),
            fired: false,
        }
    }

    /// Start the transition. Repeat clicks while the fade runs return `None`.
    pub fn trigger(&mut self) -> Option<TransitionPlan> {
        if self.fired {
            return None;
        }
        self.fired = true;
        tracing::info!(destination = %self.target, delay_ms = self.delay_ms, "page transition");
        Some(TransitionPlan {
            body_class: "fade-out",
            delay_ms: self.delay_ms,
            target: self.target.clone(),
        })
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
