//! Site configuration
//!
//! Tunables for every controller. Values come from the `site` object of the
//! embedded catalog document; anything left out falls back to the defaults
//! below, so an empty object is a complete configuration.

use serde::{Deserialize, Serialize};

/// Timing, threshold and copy settings shared by the controllers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SiteConfig {
    /// Filter token that matches every card
    pub filter_all_token: String,
    /// Fraction of the viewport height an element's top must rise above to reveal
    pub reveal_ratio: f64,
    /// Visible fraction that triggers `.animate-on-scroll` elements
    pub intersect_threshold: f64,
    /// Downward swipe distance (px) that must be exceeded to close the modal
    pub swipe_threshold_px: f64,
    /// Modal close animation length (ms)
    pub modal_close_ms: u32,
    /// Fade-out length before the page transition navigates (ms)
    pub page_transition_ms: u32,
    /// Document the page transition navigates to
    pub transition_target: String,
    /// Directory fragments are fetched from
    pub fragment_base: String,
    /// Widest viewport (px) at which a nav link click closes the menu
    pub mobile_breakpoint_px: f64,
    /// Per-card delay for the initial staggered entrance (ms)
    pub stagger_ms: u32,
    /// Placeholder shown while a fragment loads
    pub loading_text: String,
    /// Message shown when a fragment fails to load
    pub fragment_error_text: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            filter_all_token: "all".to_string(),
            reveal_ratio: 0.85,
            intersect_threshold: 0.1,
            swipe_threshold_px: 50.0,
            modal_close_ms: 300,
            page_transition_ms: 600,
            transition_target: "intro.html".to_string(),
            fragment_base: "projects-content".to_string(),
            mobile_breakpoint_px: 768.0,
            stagger_ms: 100,
            loading_text: "Loading project...".to_string(),
            fragment_error_text: "Sorry, this project could not be loaded. Please try again later."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"swipe_threshold_px": 80.0, "transition_target": "about.html"}"#)
                .unwrap();
        assert_eq!(config.swipe_threshold_px, 80.0);
        assert_eq!(config.transition_target, "about.html");
        assert_eq!(config.modal_close_ms, 300);
        assert_eq!(config.filter_all_token, "all");
    }
}
