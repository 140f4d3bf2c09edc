//! Filter Bar Component
//!
//! Horizontal row of project filter buttons. The active button carries the
//! `active` class; every button exposes its token as `data-filter`.

use dioxus::prelude::*;
use folio_core::FilterControl;

/// Properties for the FilterBar component
#[derive(Clone, PartialEq, Props)]
pub struct FilterBarProps {
    /// Buttons in display order
    pub filters: Vec<FilterControl>,
    /// Token of the active button
    pub active: String,
    /// Handler called with the clicked button's token
    pub on_select: EventHandler<String>,
}

/// Displays the filter buttons above the project grid
///
/// # Example
///
/// ```rust,ignore
/// let mut active = use_signal(|| "all".to_string());
///
/// rsx! {
///     FilterBar {
///         filters: catalog.filters.clone(),
///         active: active(),
///         on_select: move |token| active.set(token)
///     }
/// }
/// ```
#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    rsx! {
        div {
            class: "filter-buttons",
            role: "toolbar",
            "aria-label": "Filter projects",
            for control in props.filters.iter() {
                {
                    let token = control.token.clone();
                    let is_active = props.active == control.token;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{control.token}",
                            class: filter_button_class(is_active),
                            "data-filter": "{control.token}",
                            "aria-pressed": if is_active { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(token.clone());
                            },
                            "{control.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Class attribute for a filter button
pub fn filter_button_class(active: bool) -> &'static str {
    if active {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_button_class() {
        assert_eq!(filter_button_class(true), "filter-btn active");
        assert_eq!(filter_button_class(false), "filter-btn");
    }
}
