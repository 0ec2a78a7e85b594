use std::collections::HashSet;

use graph_beta_models::{
    AnyWebPart, SitePage, SitePageCollectionResponse, WebPartCollectionResponse,
};
use reqwest::Method;
use tracing::{debug, warn};
use url::Url;

use crate::error::GraphError;
use crate::request::{QueryParameters, RequestInformation};
use crate::sites::{CanvasLayoutRequestBuilder, RequestPath};

/// `/sites/{site-id}/pages`
#[derive(Debug, Clone)]
pub struct PagesRequestBuilder {
    path: RequestPath,
}

impl PagesRequestBuilder {
    pub(crate) fn new(path: RequestPath) -> Self {
        Self { path }
    }

    pub fn by_id(&self, page_id: &str) -> SitePageItemRequestBuilder {
        SitePageItemRequestBuilder {
            path: self.path.child(page_id),
        }
    }

    pub fn to_get_request_information(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<RequestInformation, GraphError> {
        self.path.request(Method::GET, query)
    }

    /// First page of the site's pages.
    pub async fn get(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<SitePageCollectionResponse, GraphError> {
        self.path.get(query).await
    }

    /// Creates a page; the service answers with the created page.
    pub async fn post(&self, body: &SitePage) -> Result<SitePage, GraphError> {
        self.path.send_body(Method::POST, body).await
    }

    /// Every page of the site, following `@odata.nextLink` until the last page.
    ///
    /// A next link pointing at a page that was already fetched ends the walk.
    pub async fn list_all(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<Vec<SitePage>, GraphError> {
        let first = self.to_get_request_information(query)?;
        let mut visited = HashSet::from([first.url().clone()]);
        let mut response: SitePageCollectionResponse = self
            .path
            .adapter()
            .send(first)
            .await?
            .ok_or(GraphError::EmptyResponse)?;
        let mut pages = Vec::new();
        loop {
            let next_link = response.odata_next_link().map(String::from);
            pages.extend(response.into_value());

            let Some(next_link) = next_link else {
                return Ok(pages);
            };
            let next_url = Url::parse(&next_link)?;
            if !visited.insert(next_url.clone()) {
                warn!(
                    next_link = %next_link,
                    collected = pages.len(),
                    "Next link repeats a fetched page, stopping"
                );
                return Ok(pages);
            }
            debug!(next_link = %next_link, collected = pages.len(), "Fetching next page");
            let request = RequestInformation::new(Method::GET, next_url);
            response = self
                .path
                .adapter()
                .send(request)
                .await?
                .ok_or(GraphError::EmptyResponse)?;
        }
    }
}

/// `/sites/{site-id}/pages/{page-id}`
#[derive(Debug, Clone)]
pub struct SitePageItemRequestBuilder {
    path: RequestPath,
}

impl SitePageItemRequestBuilder {
    pub fn canvas_layout(&self) -> CanvasLayoutRequestBuilder {
        CanvasLayoutRequestBuilder::new(self.path.child("canvasLayout"))
    }

    pub fn web_parts(&self) -> WebPartsRequestBuilder {
        WebPartsRequestBuilder {
            path: self.path.child("webParts"),
        }
    }

    pub fn to_get_request_information(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<RequestInformation, GraphError> {
        self.path.request(Method::GET, query)
    }

    pub async fn get(&self, query: Option<&QueryParameters>) -> Result<SitePage, GraphError> {
        self.path.get(query).await
    }

    pub async fn patch(&self, body: &SitePage) -> Result<SitePage, GraphError> {
        self.path.send_body(Method::PATCH, body).await
    }

    pub async fn delete(&self) -> Result<(), GraphError> {
        self.path.delete().await
    }

    /// Publishes the latest version of the page.
    pub async fn publish(&self) -> Result<(), GraphError> {
        let request = self.path.child("publish").request(Method::POST, None)?;
        self.path.adapter().send_no_content(request).await
    }
}

/// `/sites/{site-id}/pages/{page-id}/webParts`
#[derive(Debug, Clone)]
pub struct WebPartsRequestBuilder {
    path: RequestPath,
}

impl WebPartsRequestBuilder {
    pub fn by_id(&self, web_part_id: &str) -> WebPartItemRequestBuilder {
        WebPartItemRequestBuilder {
            path: self.path.child(web_part_id),
        }
    }

    pub async fn get(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<WebPartCollectionResponse, GraphError> {
        self.path.get(query).await
    }
}

/// `/sites/{site-id}/pages/{page-id}/webParts/{web-part-id}`
#[derive(Debug, Clone)]
pub struct WebPartItemRequestBuilder {
    path: RequestPath,
}

impl WebPartItemRequestBuilder {
    pub fn to_get_request_information(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<RequestInformation, GraphError> {
        self.path.request(Method::GET, query)
    }

    pub async fn get(&self, query: Option<&QueryParameters>) -> Result<AnyWebPart, GraphError> {
        self.path.get(query).await
    }
}
