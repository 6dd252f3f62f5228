use std::sync::Arc;

use engine_logging::engine_debug;

use crate::fetch::{Fetcher, WAYBACK_QUERY_URL};
use crate::{extract_snapshot, ArchivedSnapshot, LookupError};

/// Build the availability query for a page.
///
/// The page URL is appended as-is, matching what the archive expects for
/// an already canonical URL.
pub fn wayback_query_url(endpoint: &str, page_url: &str) -> String {
    let mut query = String::with_capacity(endpoint.len() + page_url.len());
    query.push_str(endpoint);
    query.push_str(page_url);
    query
}

#[derive(Clone)]
pub struct WaybackClient {
    fetcher: Arc<dyn Fetcher>,
    endpoint: String,
}

impl WaybackClient {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            endpoint: WAYBACK_QUERY_URL.to_string(),
        }
    }

    /// Point the client at another availability endpoint, e.g. a local mock.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn query_url(&self, page_url: &str) -> String {
        wayback_query_url(&self.endpoint, page_url)
    }

    /// Ask the archive for the closest snapshot of `page_url`. Exactly one attempt.
    pub async fn lookup(&self, page_url: &str) -> Result<ArchivedSnapshot, LookupError> {
        let query = self.query_url(page_url);
        engine_debug!("wayback lookup {}", query);
        let body = self.fetcher.fetch(&query).await?;
        extract_snapshot(&body)
    }
}
