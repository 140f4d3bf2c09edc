//! Folio UI Components
//!
//! Presentational Dioxus components shared by the portfolio pages. They hold
//! no controller state of their own: the selected filter, the open menu and
//! so on arrive as props, and clicks leave as event handlers.
//!
//! Class names and ids are part of the stylesheet contract (`.filter-btn`,
//! `.modal-close`, `.nav-toggle`) and must not be renamed independently of
//! the CSS.

pub mod components;

pub use components::*;
