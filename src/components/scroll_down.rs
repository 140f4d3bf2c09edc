//! Scroll-Down Arrow Component
//!
//! The hero's arrow: fades the page out, then leaves for the intro page.

use dioxus::prelude::*;
use folio_core::PageTransition;
use gloo::timers::future::TimeoutFuture;

use crate::context::use_site_config;
use crate::dom;

#[component]
pub fn ScrollDown() -> Element {
    let site = use_site_config();
    let mut transition = use_signal(|| PageTransition::new(&site));

    let on_click = move |_| {
        let Some(plan) = transition.write().trigger() else {
            return;
        };
        dom::set_body_class(plan.body_class, true);
        spawn(async move {
            TimeoutFuture::new(plan.delay_ms).await;
            dom::navigate(&plan.target);
        });
    };

    rsx! {
        button {
            r#type: "button",
            class: "scroll-down",
            "aria-label": "Continue to introduction",
            onclick: on_click,
            i { class: "fas fa-chevron-down" }
        }
    }
}
