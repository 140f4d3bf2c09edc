//! Intro page - who is behind the portfolio.

use dioxus::prelude::*;
use folio_core::RevealMode;

use crate::app::Route;
use crate::components::Reveal;

#[component]
pub fn Intro() -> Element {
    let skills = [
        ("Design", "Visual identity, layout systems, interaction design."),
        ("Frontend", "Accessible markup, CSS architecture, Rust and WebAssembly."),
        ("Prototyping", "Quick hardware and motion studies to test an idea early."),
    ];

    rsx! {
        main { class: "intro",
            Reveal {
                section { class: "intro-lead",
                    h1 { class: "page-title", "About" }
                    p {
                        "I have spent the last decade between design studios and engineering teams, "
                        "usually as the person translating one to the other."
                    }
                }
            }

            div { class: "skills",
                for (name, blurb) in skills {
                    Reveal {
                        key: "{name}",
                        mode: RevealMode::Intersect,
                        class: "skill".to_string(),
                        h3 { "{name}" }
                        p { "{blurb}" }
                    }
                }
            }

            Reveal {
                p { class: "intro-cta",
                    Link { to: Route::Projects {}, class: "btn-primary", "See the projects" }
                }
            }
        }
    }
}
