//! Home page - hero with the scroll-down arrow into the intro.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Reveal, ScrollDown};

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "home",
            header { class: "hero",
                h1 { class: "hero-title", "Hi, I'm Ada." }
                p { class: "hero-tagline",
                    "Designer and developer building calm, fast things for the web."
                }
                ScrollDown {}
            }

            Reveal {
                section { class: "highlights",
                    h2 { class: "section-header", "Selected work" }
                    p {
                        "Interfaces, identities and the occasional hardware toy. "
                        Link { to: Route::Projects {}, "Browse all projects" }
                        "."
                    }
                }
            }
        }
    }
}
