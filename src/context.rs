//! Site context for Folio.
//!
//! Provides the parsed portfolio catalog to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| SiteContext::new(load_catalog()));
//!
//! // In child components
//! let catalog = use_catalog();
//! let site = use_site_config();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Catalog, SiteConfig};

/// Portfolio content, embedded at build time.
pub const PORTFOLIO_JSON: &str = include_str!("../assets/portfolio.json");

/// Shared, read-only catalog handed out through context.
#[derive(Clone)]
pub struct SiteContext {
    catalog: Rc<Catalog>,
}

impl SiteContext {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Rc::new(catalog),
        }
    }
}

/// Parse the embedded catalog.
///
/// A broken document leaves the site usable with no projects and the
/// default settings.
pub fn load_catalog() -> Catalog {
    match Catalog::from_json(PORTFOLIO_JSON) {
        Ok(catalog) => {
            tracing::info!(projects = catalog.cards.len(), "Portfolio catalog loaded");
            catalog
        }
        Err(e) => {
            tracing::error!("Failed to parse portfolio catalog: {}", e);
            Catalog::empty()
        }
    }
}

/// Hook to access the catalog from context.
pub fn use_catalog() -> Rc<Catalog> {
    use_context::<SiteContext>().catalog
}

/// Hook to access the site settings from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteContext>().catalog.site.clone()
}
