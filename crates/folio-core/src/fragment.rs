//! Remote project fragments
//!
//! Cards with a fragment identifier have their modal body fetched from
//! `<fragment_base>/<id>.html`. The modal shows a loading placeholder at once
//! and swaps in either the markup or a fixed error message. Failures are
//! logged and shown, never retried.
//!
//! Each request is tagged with a [`FragmentTicket`]. Starting another request
//! or cancelling invalidates older tickets, so a slow response for a card the
//! user already left cannot overwrite the current body. Clones of a loader
//! share the generation counter, so a clone moved into a request task still
//! sees later cancellations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::error::{FolioError, FolioResult};

/// Path of the fragment for project `id` under `base`.
///
/// Identifiers are restricted to ASCII alphanumerics, `-` and `_` so they
/// cannot escape the fragment directory.
pub fn fragment_path(base: &str, id: &str) -> FolioResult<String> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(FolioError::InvalidProjectId(id.to_string()));
    }
    Ok(format!("{}/{}.html", base.trim_end_matches('/'), id))
}

/// Something that can fetch a fragment body.
///
/// Implementations map any non-2xx status to [`FolioError::FragmentStatus`]
/// and transport failures to [`FolioError::Network`].
#[allow(async_fn_in_trait)]
pub trait FragmentSource {
    async fn fetch(&self, path: &str) -> FolioResult<String>;
}

/// Modal body while a fragment is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentView {
    /// Request in flight; shows the placeholder text
    Loading(String),
    /// Raw markup to inject
    Ready(String),
    /// Request failed; shows the error text
    Failed(String),
}

impl FragmentView {
    pub fn is_loading(&self) -> bool {
        matches!(self, FragmentView::Loading(_))
    }
}

/// One in-flight fragment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentTicket {
    generation: u64,
    pub id: String,
    pub path: String,
}

/// Issues tickets and turns completed requests into modal bodies.
#[derive(Debug, Clone)]
pub struct FragmentLoader {
    base: String,
    loading_text: String,
    error_text: String,
    generation: Arc<AtomicU64>,
}

impl FragmentLoader {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            base: site.fragment_base.clone(),
            loading_text: site.loading_text.clone(),
            error_text: site.fragment_error_text.clone(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a request for `id`, invalidating any earlier ticket.
    ///
    /// Returns the ticket and the placeholder view to show meanwhile. An
    /// unusable identifier yields the error view immediately.
    pub fn begin(&mut self, id: &str) -> Result<(FragmentTicket, FragmentView), FragmentView> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        match fragment_path(&self.base, id) {
            Ok(path) => {
                tracing::debug!(id, %path, generation, "fragment request");
                let ticket = FragmentTicket {
                    generation,
                    id: id.to_string(),
                    path,
                };
                Ok((ticket, FragmentView::Loading(self.loading_text.clone())))
            }
            Err(e) => {
                tracing::warn!(error = %e, "fragment request rejected");
                Err(FragmentView::Failed(self.error_text.clone()))
            }
        }
    }

    /// Invalidate every outstanding ticket.
    pub fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: &FragmentTicket) -> bool {
        ticket.generation == self.generation.load(Ordering::SeqCst)
    }

    /// Turn a finished request into the view to show, or `None` if the
    /// ticket is stale and the result must be dropped.
    pub fn complete(
        &self,
        ticket: &FragmentTicket,
        result: FolioResult<String>,
    ) -> Option<FragmentView> {
        if !self.is_current(ticket) {
            tracing::debug!(id = %ticket.id, "dropping stale fragment response");
            return None;
        }
        match result {
            Ok(markup) => Some(FragmentView::Ready(markup)),
            Err(e) => {
                tracing::warn!(id = %ticket.id, path = %ticket.path, error = %e, "fragment fetch failed");
                Some(FragmentView::Failed(self.error_text.clone()))
            }
        }
    }

    /// Fetch `ticket` from `source` and resolve it in one step.
    pub async fn load<S: FragmentSource>(
        &self,
        source: &S,
        ticket: &FragmentTicket,
    ) -> Option<FragmentView> {
        let result = source.fetch(&ticket.path).await;
        self.complete(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_path() {
        assert_eq!(
            fragment_path("projects-content", "atlas").unwrap(),
            "projects-content/atlas.html"
        );
        assert_eq!(
            fragment_path("projects-content/", "web_app-2").unwrap(),
            "projects-content/web_app-2.html"
        );
    }

    #[test]
    fn test_fragment_path_rejects_traversal() {
        for bad in ["", "../secret", "a/b", "a.b", "x y"] {
            assert!(
                matches!(fragment_path("p", bad), Err(FolioError::InvalidProjectId(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_begin_shows_loading() {
        let site = SiteConfig::default();
        let mut loader = FragmentLoader::new(&site);
        let (ticket, view) = loader.begin("atlas").unwrap();
        assert_eq!(ticket.path, "projects-content/atlas.html");
        assert_eq!(view, FragmentView::Loading(site.loading_text.clone()));
        assert!(view.is_loading());
    }

    #[test]
    fn test_invalid_id_fails_immediately() {
        let site = SiteConfig::default();
        let mut loader = FragmentLoader::new(&site);
        let view = loader.begin("../etc").unwrap_err();
        assert_eq!(view, FragmentView::Failed(site.fragment_error_text));
    }

    #[test]
    fn test_complete_success_and_failure() {
        let site = SiteConfig::default();
        let mut loader = FragmentLoader::new(&site);
        let (ticket, _) = loader.begin("atlas").unwrap();

        assert_eq!(
            loader.complete(&ticket, Ok("<h2>Atlas</h2>".into())),
            Some(FragmentView::Ready("<h2>Atlas</h2>".into()))
        );

        let failure = Err(FolioError::FragmentStatus {
            path: ticket.path.clone(),
            status: 500,
        });
        assert_eq!(
            loader.complete(&ticket, failure),
            Some(FragmentView::Failed(site.fragment_error_text))
        );
    }

    #[test]
    fn test_stale_ticket_dropped() {
        let site = SiteConfig::default();
        let mut loader = FragmentLoader::new(&site);
        let (first, _) = loader.begin("atlas").unwrap();
        let (second, _) = loader.begin("orbit").unwrap();

        assert_eq!(loader.complete(&first, Ok("old".into())), None);
        assert!(loader.complete(&second, Ok("new".into())).is_some());

        loader.cancel();
        assert_eq!(loader.complete(&second, Ok("new".into())), None);
    }

    #[test]
    fn test_clone_sees_later_cancel() {
        let site = SiteConfig::default();
        let mut loader = FragmentLoader::new(&site);
        let (ticket, _) = loader.begin("atlas").unwrap();
        let in_flight = loader.clone();

        assert!(in_flight.is_current(&ticket));
        loader.begin("orbit").unwrap();
        assert!(!in_flight.is_current(&ticket));
        assert_eq!(in_flight.complete(&ticket, Ok("old".into())), None);
    }
}
