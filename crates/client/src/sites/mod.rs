//! Request builders for `/sites` and the resources below it.
//!
//! Builders only accumulate path segments; nothing is sent until one of the
//! verb methods (`get`, `patch`, ...) is awaited.

mod canvas_layout;
mod pages;

pub use canvas_layout::*;
pub use pages::*;

use graph_beta_models::{Site, SiteCollectionResponse};
use graph_beta_serialization::{Parsable, ParsableFactory};
use reqwest::Method;

use crate::adapter::HttpRequestAdapter;
use crate::error::GraphError;
use crate::request::{QueryParameters, RequestInformation};

/// Adapter plus the path segments of one resource.
#[derive(Debug, Clone)]
pub(crate) struct RequestPath {
    adapter: HttpRequestAdapter,
    segments: Vec<String>,
}

impl RequestPath {
    pub(crate) fn root(adapter: HttpRequestAdapter, segment: &str) -> Self {
        Self {
            adapter,
            segments: vec![segment.to_string()],
        }
    }

    pub(crate) fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self {
            adapter: self.adapter.clone(),
            segments,
        }
    }

    pub(crate) fn adapter(&self) -> &HttpRequestAdapter {
        &self.adapter
    }

    pub(crate) fn request(
        &self,
        method: Method,
        query: Option<&QueryParameters>,
    ) -> Result<RequestInformation, GraphError> {
        RequestInformation::for_path(method, self.adapter.base_url(), &self.segments, query)
    }

    pub(crate) fn request_with_body<B: Parsable>(
        &self,
        method: Method,
        body: &B,
    ) -> Result<RequestInformation, GraphError> {
        let mut request = self.request(method, None)?;
        request.set_content_from_parsable(body)?;
        Ok(request)
    }

    pub(crate) async fn get<T: ParsableFactory>(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<T, GraphError> {
        let request = self.request(Method::GET, query)?;
        self.adapter
            .send(request)
            .await?
            .ok_or(GraphError::EmptyResponse)
    }

    /// Sends `body` and parses the returned representation.
    pub(crate) async fn send_body<B: Parsable, T: ParsableFactory>(
        &self,
        method: Method,
        body: &B,
    ) -> Result<T, GraphError> {
        let request = self.request_with_body(method, body)?;
        self.adapter
            .send(request)
            .await?
            .ok_or(GraphError::EmptyResponse)
    }

    pub(crate) async fn delete(&self) -> Result<(), GraphError> {
        let request = self.request(Method::DELETE, None)?;
        self.adapter.send_no_content(request).await
    }
}

/// `/sites`
#[derive(Debug, Clone)]
pub struct SitesRequestBuilder {
    path: RequestPath,
}

impl SitesRequestBuilder {
    pub(crate) fn new(adapter: HttpRequestAdapter) -> Self {
        Self {
            path: RequestPath::root(adapter, "sites"),
        }
    }

    /// `/sites/{site-id}`; `root` addresses the tenant root site.
    pub fn by_id(&self, site_id: &str) -> SiteItemRequestBuilder {
        SiteItemRequestBuilder {
            path: self.path.child(site_id),
        }
    }

    pub fn to_get_request_information(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<RequestInformation, GraphError> {
        self.path.request(Method::GET, query)
    }

    /// Searches or lists sites; the service requires a `$filter` or `search`.
    pub async fn get(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<SiteCollectionResponse, GraphError> {
        self.path.get(query).await
    }
}

/// `/sites/{site-id}`
#[derive(Debug, Clone)]
pub struct SiteItemRequestBuilder {
    path: RequestPath,
}

impl SiteItemRequestBuilder {
    pub fn pages(&self) -> PagesRequestBuilder {
        PagesRequestBuilder::new(self.path.child("pages"))
    }

    pub fn to_get_request_information(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<RequestInformation, GraphError> {
        self.path.request(Method::GET, query)
    }

    pub async fn get(&self, query: Option<&QueryParameters>) -> Result<Site, GraphError> {
        self.path.get(query).await
    }

    pub async fn patch(&self, body: &Site) -> Result<Site, GraphError> {
        self.path.send_body(Method::PATCH, body).await
    }
}
