//! Button Components
//!
//! - Icon: compact square button with an accessible label
//! - Close: the modal's `×`
//! - NavToggle: the hamburger that opens the mobile menu

use dioxus::prelude::*;
use folio_core::NavMenu;

/// Modal pager direction
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PagerDirection {
    Previous,
    Next,
}

impl PagerDirection {
    /// Element id the stylesheet positions the button by
    pub fn id(&self) -> &'static str {
        match self {
            PagerDirection::Previous => "prevProject",
            PagerDirection::Next => "nextProject",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PagerDirection::Previous => "Previous project",
            PagerDirection::Next => "Next project",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            PagerDirection::Previous => "\u{2039}",
            PagerDirection::Next => "\u{203A}",
        }
    }
}

/// Icon button for compact actions (close, paging, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional element id
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            r#type: "button",
            id: props.id.clone(),
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "modal-close".to_string(),
            "\u{00D7}"
        }
    }
}

/// Previous/next button inside the modal
#[component]
pub fn PagerButton(direction: PagerDirection, onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: direction.label().to_string(),
            id: direction.id().to_string(),
            class: "modal-nav".to_string(),
            "{direction.glyph()}"
        }
    }
}

/// Hamburger toggle for the navigation menu
#[component]
pub fn NavToggle(menu: NavMenu, onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "nav-toggle",
            "aria-label": "Toggle navigation",
            "aria-expanded": menu.aria_expanded(),
            onclick: move |_| onclick.call(()),
            i { class: menu.icon_class() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_ids() {
        assert_eq!(PagerDirection::Previous.id(), "prevProject");
        assert_eq!(PagerDirection::Next.id(), "nextProject");
    }

    #[test]
    fn pager_labels() {
        assert_eq!(PagerDirection::Next.label(), "Next project");
        assert_ne!(PagerDirection::Next.glyph(), PagerDirection::Previous.glyph());
    }
}
