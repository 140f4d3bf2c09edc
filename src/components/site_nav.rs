//! Site Navigation Component
//!
//! Top bar with the hamburger toggle. Below the mobile breakpoint the menu
//! overlays the page, so following a link closes it again.

use dioxus::prelude::*;
use folio_core::NavMenu;
use folio_ui::NavToggle;

use crate::app::Route;
use crate::context::use_site_config;
use crate::dom;

#[component]
pub fn SiteNav() -> Element {
    let site = use_site_config();
    let mut menu = use_signal(NavMenu::new);

    let links = [
        (Route::Home {}, "Home"),
        (Route::Intro {}, "About"),
        (Route::Projects {}, "Projects"),
    ];
    let breakpoint = site.mobile_breakpoint_px;

    rsx! {
        nav { class: "site-nav",
            Link { to: Route::Home {}, class: "nav-brand", "Folio" }

            NavToggle {
                menu: menu(),
                onclick: move |_| menu.write().toggle(),
            }

            ul { class: menu().menu_class(),
                for (route, label) in links {
                    li {
                        key: "{label}",
                        onclick: move |_| {
                            if menu.write().link_clicked(dom::viewport_width(), breakpoint) {
                                tracing::debug!("nav menu closed after link click");
                            }
                        },
                        Link { to: route, class: "nav-link", "{label}" }
                    }
                }
            }
        }
    }
}
