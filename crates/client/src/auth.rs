use async_trait::async_trait;
use url::Url;

use crate::error::GraphError;

/// Supplies the bearer token attached to outgoing requests.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync + std::fmt::Debug {
    /// Token for a request to `url`; `None` sends the request unauthenticated.
    async fn get_authorization_token(&self, url: &Url) -> Result<Option<String>, GraphError>;
}

/// Sends requests without an `Authorization` header.
#[derive(Debug, Clone, Default)]
pub struct AnonymousTokenProvider;

#[async_trait]
impl AccessTokenProvider for AnonymousTokenProvider {
    async fn get_authorization_token(&self, _url: &Url) -> Result<Option<String>, GraphError> {
        Ok(None)
    }
}

/// A pre-acquired token, attached only to the allowed hosts.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
    allowed_hosts: Vec<String>,
}

impl StaticTokenProvider {
    /// Token sent to any host.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            allowed_hosts: Vec::new(),
        }
    }

    /// Restricts the token to the given hosts, compared case-insensitively.
    pub fn with_allowed_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_hosts = hosts
            .into_iter()
            .map(|h| h.into().to_ascii_lowercase())
            .collect();
        self
    }

    fn is_allowed(&self, url: &Url) -> bool {
        if self.allowed_hosts.is_empty() {
            return true;
        }
        url.host_str()
            .map(|host| self.allowed_hosts.iter().any(|h| h == &host.to_ascii_lowercase()))
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"<redacted>")
            .field("allowed_hosts", &self.allowed_hosts)
            .finish()
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn get_authorization_token(&self, url: &Url) -> Result<Option<String>, GraphError> {
        if self.token.is_empty() {
            return Err(GraphError::Auth("empty access token".to_string()));
        }
        if !self.is_allowed(url) {
            return Ok(None);
        }
        Ok(Some(self.token.clone()))
    }
}
