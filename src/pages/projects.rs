//! Projects page - filterable grid with the detail modal.

use dioxus::prelude::*;

use crate::components::{ProjectGrid, Reveal};

#[component]
pub fn Projects() -> Element {
    rsx! {
        main { class: "projects-page",
            Reveal {
                header { class: "projects-header",
                    h1 { class: "page-title", "Projects" }
                    p { class: "body-text", "Filter by discipline, click a tile for the details." }
                }
            }
            ProjectGrid {}
        }
    }
}
