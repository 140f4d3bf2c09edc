//! Project Card Component
//!
//! One tile of the project grid. Carries its tags in `data-category`; the
//! filter drives its inline `display`.

use dioxus::prelude::*;
use folio_core::{Card, CardVisibility};

/// Grid tile for a single project
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard {
///         card: catalog.cards[0].clone(),
///         visibility: CardVisibility::Shown,
///         entrance_delay: Some(200),
///         on_open: move |_| modal.open_card(0),
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(
    card: Card,
    visibility: CardVisibility,
    /// Staggered entrance delay (ms) for the first paint after load
    #[props(default)]
    entrance_delay: Option<u32>,
    on_open: EventHandler<()>,
) -> Element {
    let class = if entrance_delay.is_some() {
        "project-card card-enter"
    } else {
        "project-card"
    };
    let style = match entrance_delay {
        Some(ms) => format!("display: {}; animation-delay: {}ms;", visibility.display(), ms),
        None => format!("display: {};", visibility.display()),
    };

    rsx! {
        div {
            class: "{class}",
            "data-category": card.category.clone().unwrap_or_default(),
            "data-project": card.fragment.clone(),
            style: "{style}",
            onclick: move |_| on_open.call(()),

            if !card.image.is_empty() {
                img { src: "{card.image}", alt: "{card.title}", loading: "lazy" }
            }
            h3 { "{card.title}" }
            if !card.description.is_empty() {
                p { "{card.description}" }
            }
        }
    }
}
