//! Navigation menu toggle
//!
//! The hamburger button flips the menu open and closed; its icon and
//! `aria-expanded` follow. Following a link closes the menu, but only on
//! narrow viewports where the menu overlays the page.

/// Open/closed state of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was clicked. Returns whether the menu closed.
    pub fn link_clicked(&mut self, viewport_width: f64, breakpoint: f64) -> bool {
        if self.open && viewport_width <= breakpoint {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// Class attribute for `.nav-menu`.
    pub fn menu_class(self) -> &'static str {
        if self.open {
            "nav-menu show"
        } else {
            "nav-menu"
        }
    }

    /// Font Awesome class for the toggle icon.
    pub fn icon_class(self) -> &'static str {
        if self.open {
            "fas fa-times"
        } else {
            "fas fa-bars"
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}
