use std::sync::Arc;

use graph_beta_models::SitePage;
use graph_beta_serialization::{Parsable, serialize_object};
use tokio::sync::Semaphore;
use tracing::{debug, error, instrument};

use crate::adapter::HttpRequestAdapter;
use crate::error::GraphError;
use crate::request::QueryParameters;
use crate::sites::SitesRequestBuilder;

/// A page that could not be fetched by [`BetaService::get_site_pages`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageFetchFailure {
    pub page_id: String,
    pub error: GraphError,
}

/// Outcome of a bulk page fetch: every page that was retrieved, plus the
/// failures, which do not abort the other fetches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitePages {
    pub pages: Vec<SitePage>,
    pub failures: Vec<PageFetchFailure>,
}

/// Entry point to the beta endpoints.
#[derive(Debug, Clone)]
pub struct BetaService {
    adapter: HttpRequestAdapter,
}

impl BetaService {
    pub fn new(adapter: HttpRequestAdapter) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &HttpRequestAdapter {
        &self.adapter
    }

    /// JSON representation of a model, as it would be sent to the service.
    pub fn serialize<T: Parsable>(&self, object: &T) -> Result<Vec<u8>, GraphError> {
        Ok(serialize_object(object)?)
    }

    pub fn sites(&self) -> SitesRequestBuilder {
        SitesRequestBuilder::new(self.adapter.clone())
    }

    /// Fetches the given pages of a site with their canvas layout.
    ///
    /// At most `page_fetch_concurrency` requests are in flight at once. Pages
    /// come back in the order of `page_ids`, skipping the failed ones.
    #[instrument(skip(self, page_ids), fields(site_id = %site_id, requested = page_ids.len()))]
    pub async fn get_site_pages(&self, site_id: &str, page_ids: &[String]) -> SitePages {
        let limit = self.adapter.options().page_fetch_concurrency.max(1);
        let semaphore = Arc::new(Semaphore::new(limit));
        let pages = self.sites().by_id(site_id).pages();
        let query = QueryParameters::new().expand(["canvasLayout"]);

        let mut handles = Vec::with_capacity(page_ids.len());
        for page_id in page_ids {
            let semaphore = Arc::clone(&semaphore);
            let page = pages.by_id(page_id);
            let query = query.clone();
            let handle = tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| GraphError::Connection(e.to_string()))?;
                page.get(Some(&query)).await
            });
            handles.push((page_id.clone(), handle));
        }

        let mut result = SitePages::default();
        for (page_id, handle) in handles {
            let outcome = handle
                .await
                .unwrap_or_else(|e| Err(GraphError::Connection(e.to_string())));
            match outcome {
                Ok(page) => result.pages.push(page),
                Err(error) => {
                    error!(page_id = %page_id, error = %error, "Failed to fetch site page");
                    result.failures.push(PageFetchFailure { page_id, error });
                }
            }
        }

        debug!(
            fetched = result.pages.len(),
            failed = result.failures.len(),
            "Fetched site pages"
        );
        result
    }
}
