//! Browser glue
//!
//! The few places the site touches the document directly instead of through
//! rendered markup: the scroll-locked `<body>`, classes on `<html>`/`<body>`,
//! viewport geometry and full-page navigation. A missing API is logged and
//! skipped; nothing here panics on a DOM error.

use folio_core::{ScrollLock, Viewport};
use futures::channel::oneshot;
use gloo::render::request_animation_frame;
use gloo::utils::{body, document, document_element, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Class added to `<html>` and `<body>` while the modal holds the scroll lock.
const LOCK_CLASS: &str = "modal-active";

/// The real window, as seen by the modal controller.
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&mut self, y: f64) {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Instant);
        window().scroll_to_with_scroll_to_options(&options);
    }

    fn measure_scrollbar(&mut self) {
        publish_scrollbar_width();
    }

    fn lock_body(&mut self, offset: f64) {
        set_class(&document_element(), LOCK_CLASS, true);
        let body = body();
        set_class(&body, LOCK_CLASS, true);

        let style = body.style();
        for (name, value) in [
            ("position", "fixed".to_string()),
            ("top", ScrollLock::body_top(offset)),
            ("width", "100%".to_string()),
        ] {
            if let Err(e) = style.set_property(name, &value) {
                tracing::debug!(?e, property = name, "could not set body style");
            }
        }
    }

    fn unlock_body(&mut self) {
        set_class(&document_element(), LOCK_CLASS, false);
        let body = body();
        set_class(&body, LOCK_CLASS, false);

        let style = body.style();
        for name in ["position", "top", "width"] {
            if let Err(e) = style.remove_property(name) {
                tracing::debug!(?e, property = name, "could not clear body style");
            }
        }
    }
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        tracing::debug!(?e, class, "classList update failed");
    }
}

/// Add or remove `class` on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    set_class(&body(), class, on);
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Top and bottom edges of `element` in viewport coordinates.
pub fn element_bounds(element: &Element) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.top(), rect.bottom())
}

/// Width of the platform scrollbar, from a hidden `overflow: scroll` probe.
/// Independent of whether the current page scrolls.
pub fn measure_scrollbar_width() -> f64 {
    let document = document();
    let (Ok(outer), Ok(inner)) = (document.create_element("div"), document.create_element("div"))
    else {
        tracing::debug!("could not create scrollbar probe");
        return 0.0;
    };
    let (Some(outer), Some(inner)) = (
        outer.dyn_ref::<HtmlElement>().cloned(),
        inner.dyn_ref::<HtmlElement>().cloned(),
    ) else {
        return 0.0;
    };

    let style = outer.style();
    for (name, value) in [
        ("position", "absolute"),
        ("top", "-9999px"),
        ("width", "100px"),
        ("visibility", "hidden"),
        ("overflow", "scroll"),
    ] {
        if let Err(e) = style.set_property(name, value) {
            tracing::debug!(?e, property = name, "could not style scrollbar probe");
        }
    }

    let body = body();
    if body.append_child(&outer).is_err() || outer.append_child(&inner).is_err() {
        tracing::debug!("could not attach scrollbar probe");
        return 0.0;
    }
    let width = ScrollLock::scrollbar_width(outer.offset_width() as f64, inner.offset_width() as f64);
    if let Err(e) = body.remove_child(&outer) {
        tracing::debug!(?e, "could not detach scrollbar probe");
    }
    width
}

/// Measure the scrollbar and set `--scrollbar-width` on the root element.
pub fn publish_scrollbar_width() {
    let width = measure_scrollbar_width();

    let root = document_element();
    let Some(root) = root.dyn_ref::<HtmlElement>() else {
        tracing::debug!("root element is not an HTMLElement");
        return;
    };
    if let Err(e) = root
        .style()
        .set_property("--scrollbar-width", &format!("{}px", width))
    {
        tracing::debug!(?e, "could not publish scrollbar width");
    }
}

/// Resolves on the next animation frame. Dropping the future cancels the
/// frame request.
pub async fn next_frame() {
    let (tx, rx) = oneshot::channel();
    let _frame = request_animation_frame(move |_| {
        let _ = tx.send(());
    });
    let _ = rx.await;
}

/// Full-page navigation to `target`.
pub fn navigate(target: &str) {
    if let Err(e) = window().location().set_href(target) {
        tracing::error!(?e, target, "navigation failed");
    }
}
