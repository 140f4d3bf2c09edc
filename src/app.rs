use dioxus::prelude::*;

use crate::components::SiteNav;
use crate::context::{load_catalog, SiteContext};
use crate::dom;
use crate::pages::{Home, Intro, Projects};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Hero with the scroll-down arrow into the intro
/// - `/intro` - About the author
/// - `/projects` - Filterable project grid with the detail modal
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/intro")]
        Intro {},
        #[route("/projects")]
        Projects {},
}

/// Root application component.
///
/// Provides global styles, the portfolio catalog and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| SiteContext::new(load_catalog()));

    // Publish the scrollbar width once so the scroll-locked body can pad for it
    use_effect(move || {
        dom::publish_scrollbar_width();
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Page chrome shared by every route.
#[component]
fn Shell() -> Element {
    rsx! {
        SiteNav {}
        Outlet::<Route> {}
    }
}
