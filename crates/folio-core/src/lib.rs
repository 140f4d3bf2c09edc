//! Folio Core Library
//!
//! Controllers behind the portfolio site: card filtering, the project modal,
//! scroll reveal, the navigation menu and the page transition.
//!
//! ## Overview
//!
//! Every controller owns its state explicitly and knows nothing about the DOM.
//! The web crate renders markup from these values and forwards browser events
//! (clicks, keys, touches, scroll) into them. Browser side effects that must
//! happen in a precise order, like locking body scroll, go through the
//! [`Viewport`] trait so the same sequence can be verified on the host.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{Catalog, FilterState, FilterToken, ModalController};
//!
//! let catalog = Catalog::from_json(include_str!("portfolio.json"))?;
//! let mut filter = FilterState::new(&catalog.site, catalog.cards.len());
//! filter.apply(FilterToken::parse("web", &catalog.site), &catalog.cards);
//!
//! let visible = filter.visible_subset();
//! let mut modal = ModalController::new();
//! modal.open(0, visible.len(), &mut viewport);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod fragment;
pub mod gesture;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod transition;

// Re-exports
pub use catalog::{Card, CardContent, Catalog, FilterControl};
pub use config::SiteConfig;
pub use error::{FolioError, FolioResult};
pub use filter::{parse_categories, CardVisibility, FilterApplied, FilterState, FilterToken};
pub use fragment::{fragment_path, FragmentLoader, FragmentSource, FragmentTicket, FragmentView};
pub use gesture::{SwipeOutcome, SwipeTracker};
pub use modal::{
    CloseTicket, ModalController, ModalKey, ModalPhase, ModalStep, ScrollLock, Viewport,
};
pub use nav::NavMenu;
pub use reveal::{visible_fraction, RevealMode, RevealState};
pub use transition::{PageTransition, TransitionPlan};
