//! Reveal Component
//!
//! Wraps content that animates in once scrolled into view. The check runs at
//! mount and on window scroll until the element is revealed, at which point
//! the scroll listener is dropped.

use dioxus::prelude::*;
use folio_core::{RevealMode, RevealState};
use gloo::events::EventListener;

use crate::context::use_site_config;
use crate::dom;

#[component]
pub fn Reveal(
    /// Trigger rule (`.reveal` or `.animate-on-scroll`)
    #[props(default)]
    mode: RevealMode,
    /// Extra classes for the wrapper
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let site = use_site_config();
    let mut state = use_signal(|| RevealState::new(mode, &site));
    let mut listener = use_signal(|| None::<EventListener>);

    use_effect(move || {
        if state.read().is_revealed() && listener.peek().is_some() {
            listener.set(None);
        }
    });

    let full_class = match class {
        Some(extra) => format!("{} {}", state.read().class(), extra),
        None => state.read().class(),
    };

    rsx! {
        div {
            class: "{full_class}",
            onmounted: move |evt| {
                let Some(element) = evt.data().downcast::<web_sys::Element>().cloned() else {
                    tracing::debug!("reveal element is not a DOM element");
                    return;
                };

                let mut check = move || {
                    let (top, bottom) = dom::element_bounds(&element);
                    let mut next = state.peek().clone();
                    if next.observe(top, bottom, dom::viewport_height()) {
                        state.set(next);
                    }
                };

                check();
                if !state.peek().is_revealed() {
                    let on_scroll = EventListener::new(&gloo::utils::window(), "scroll", move |_| check());
                    listener.set(Some(on_scroll));
                }
            },
            {children}
        }
    }
}
