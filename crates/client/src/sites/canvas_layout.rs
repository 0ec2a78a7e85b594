use graph_beta_models::{
    CanvasLayout, HorizontalSection, HorizontalSectionCollectionResponse, HorizontalSectionColumn,
    HorizontalSectionColumnCollectionResponse,
};
use reqwest::Method;

use crate::error::GraphError;
use crate::request::{QueryParameters, RequestInformation};
use crate::sites::RequestPath;

/// `.../pages/{page-id}/canvasLayout`
#[derive(Debug, Clone)]
pub struct CanvasLayoutRequestBuilder {
    path: RequestPath,
}

impl CanvasLayoutRequestBuilder {
    pub(crate) fn new(path: RequestPath) -> Self {
        Self { path }
    }

    pub fn horizontal_sections(&self) -> HorizontalSectionsRequestBuilder {
        HorizontalSectionsRequestBuilder {
            path: self.path.child("horizontalSections"),
        }
    }

    pub async fn get(&self, query: Option<&QueryParameters>) -> Result<CanvasLayout, GraphError> {
        self.path.get(query).await
    }
}

/// `.../canvasLayout/horizontalSections`
#[derive(Debug, Clone)]
pub struct HorizontalSectionsRequestBuilder {
    path: RequestPath,
}

impl HorizontalSectionsRequestBuilder {
    pub fn by_id(&self, section_id: &str) -> HorizontalSectionItemRequestBuilder {
        HorizontalSectionItemRequestBuilder {
            path: self.path.child(section_id),
        }
    }

    pub async fn get(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<HorizontalSectionCollectionResponse, GraphError> {
        self.path.get(query).await
    }
}

/// `.../horizontalSections/{section-id}`
#[derive(Debug, Clone)]
pub struct HorizontalSectionItemRequestBuilder {
    path: RequestPath,
}

impl HorizontalSectionItemRequestBuilder {
    pub fn columns(&self) -> ColumnsRequestBuilder {
        ColumnsRequestBuilder {
            path: self.path.child("columns"),
        }
    }

    pub async fn get(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<HorizontalSection, GraphError> {
        self.path.get(query).await
    }
}

/// `.../horizontalSections/{section-id}/columns`
#[derive(Debug, Clone)]
pub struct ColumnsRequestBuilder {
    path: RequestPath,
}

impl ColumnsRequestBuilder {
    pub fn by_id(&self, column_id: &str) -> HorizontalSectionColumnItemRequestBuilder {
        HorizontalSectionColumnItemRequestBuilder {
            path: self.path.child(column_id),
        }
    }

    pub async fn get(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<HorizontalSectionColumnCollectionResponse, GraphError> {
        self.path.get(query).await
    }
}

/// `.../horizontalSections/{section-id}/columns/{column-id}`
#[derive(Debug, Clone)]
pub struct HorizontalSectionColumnItemRequestBuilder {
    path: RequestPath,
}

impl HorizontalSectionColumnItemRequestBuilder {
    pub fn to_get_request_information(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<RequestInformation, GraphError> {
        self.path.request(Method::GET, query)
    }

    pub async fn get(
        &self,
        query: Option<&QueryParameters>,
    ) -> Result<HorizontalSectionColumn, GraphError> {
        self.path.get(query).await
    }

    pub async fn patch(
        &self,
        body: &HorizontalSectionColumn,
    ) -> Result<HorizontalSectionColumn, GraphError> {
        self.path.send_body(Method::PATCH, body).await
    }

    pub async fn delete(&self) -> Result<(), GraphError> {
        self.path.delete().await
    }
}
