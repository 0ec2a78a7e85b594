use graph_beta_serialization::{Parsable, serialize_object};
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::GraphError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// OData system query options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameters {
    pub select: Vec<String>,
    pub expand: Vec<String>,
    pub filter: Option<String>,
    pub orderby: Vec<String>,
    pub top: Option<u32>,
    pub skip: Option<u32>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn expand<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand.extend(relations.into_iter().map(Into::into));
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn orderby<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderby.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Appends the non-empty options to the query string of `url`.
    pub fn apply_to(&self, url: &mut Url) {
        let mut pairs = Vec::new();
        if !self.select.is_empty() {
            pairs.push(("$select", self.select.join(",")));
        }
        if !self.expand.is_empty() {
            pairs.push(("$expand", self.expand.join(",")));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("$filter", filter.clone()));
        }
        if !self.orderby.is_empty() {
            pairs.push(("$orderby", self.orderby.join(",")));
        }
        if let Some(top) = self.top {
            pairs.push(("$top", top.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("$skip", skip.to_string()));
        }
        if pairs.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(pairs);
    }
}

/// A fully resolved request, ready to be sent by the adapter.
#[derive(Debug, Clone)]
pub struct RequestInformation {
    method: Method,
    url: Url,
    headers: HeaderMap,
    content: Option<Vec<u8>>,
}

impl RequestInformation {
    /// Request for an absolute URL, such as an `@odata.nextLink`.
    pub fn new(method: Method, url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Self {
            method,
            url,
            headers,
            content: None,
        }
    }

    /// Request for `segments` below the service root.
    pub fn for_path(
        method: Method,
        base_url: &Url,
        segments: &[String],
        query: Option<&QueryParameters>,
    ) -> Result<Self, GraphError> {
        let mut url = base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GraphError::Config(format!("{base_url} cannot be a base URL")))?
            .pop_if_empty()
            .extend(segments);
        if let Some(query) = query {
            query.apply_to(&mut url);
        }
        Ok(Self::new(method, url))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    pub fn add_header(&mut self, name: &str, value: &str) -> Result<(), GraphError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| GraphError::Config(format!("invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| GraphError::Config(format!("invalid header value: {e}")))?;
        self.headers.append(name, value);
        Ok(())
    }

    /// Serializes `body` as the JSON content of the request.
    pub fn set_content_from_parsable<T: Parsable>(&mut self, body: &T) -> Result<(), GraphError> {
        self.content = Some(serialize_object(body)?);
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_beta_models::SitePage;
    use test_log::test;

    fn base() -> Url {
        Url::parse("https://graph.microsoft.com/beta").unwrap()
    }

    #[test]
    fn test_path_segments_are_escaped() {
        let segments = vec![
            "sites".to_string(),
            "contoso.sharepoint.com,1f2e,3d4c".to_string(),
            "pages".to_string(),
            "a b/c".to_string(),
        ];
        let request = RequestInformation::for_path(Method::GET, &base(), &segments, None).unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://graph.microsoft.com/beta/sites/contoso.sharepoint.com,1f2e,3d4c/pages/a%20b%2Fc"
        );
        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert!(request.content().is_none());
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let base = Url::parse("http://127.0.0.1:8080/beta/").unwrap();
        let request =
            RequestInformation::for_path(Method::GET, &base, &["sites".to_string()], None).unwrap();
        assert_eq!(request.url().as_str(), "http://127.0.0.1:8080/beta/sites");
    }

    #[test]
    fn test_query_parameters() {
        let query = QueryParameters::new()
            .select(["id", "title"])
            .expand(["canvasLayout"])
            .filter("promotionKind eq 'newsPost'")
            .top(10);
        let request =
            RequestInformation::for_path(Method::GET, &base(), &["pages".to_string()], Some(&query))
                .unwrap();

        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("$select".to_string(), "id,title".to_string()),
                ("$expand".to_string(), "canvasLayout".to_string()),
                ("$filter".to_string(), "promotionKind eq 'newsPost'".to_string()),
                ("$top".to_string(), "10".to_string()),
            ]
        );

        let mut url = base();
        QueryParameters::new().apply_to(&mut url);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_parsable_content() {
        let mut page = SitePage::new();
        page.set_title(Some("Draft".to_string()));

        let mut request = RequestInformation::new(Method::POST, base());
        request.set_content_from_parsable(&page).unwrap();
        request.add_header("Prefer", "return=minimal").unwrap();

        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()["prefer"], "return=minimal");
        assert_eq!(
            request.content().unwrap(),
            br##"{"@odata.type":"#microsoft.graph.sitePage","title":"Draft"}"##
        );
        assert!(request.add_header("bad header", "x").is_err());
    }
}
