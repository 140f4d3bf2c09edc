//! UI Components for Folio.
//!
//! Page-level components that own controller state. Presentational pieces
//! live in the `folio-ui` crate.

mod project_card;
mod project_grid;
mod project_modal;
mod reveal;
mod scroll_down;
mod site_nav;

pub use project_card::ProjectCard;
pub use project_grid::ProjectGrid;
pub use project_modal::{use_project_modal, ProjectModal, ProjectModalView};
pub use reveal::Reveal;
pub use scroll_down::ScrollDown;
pub use site_nav::SiteNav;
