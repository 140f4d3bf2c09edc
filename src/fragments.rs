//! Fragment fetching over HTTP.

use folio_core::{FolioError, FolioResult, FragmentSource};
use gloo::net::http::Request;

/// Fetches fragments relative to the current document with the Fetch API.
#[derive(Clone, Copy, Default)]
pub struct HttpFragmentSource;

impl FragmentSource for HttpFragmentSource {
    async fn fetch(&self, path: &str) -> FolioResult<String> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|e| FolioError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FolioError::FragmentStatus {
                path: path.to_string(),
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FolioError::Network(e.to_string()))
    }
}
