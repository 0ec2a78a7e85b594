use std::time::Duration;

use reqwest::header::HeaderMap;

pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/beta";
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(3 * 60);
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(3);
const DEFAULT_MAX_RETRY_DELAY: Duration = Duration::from_secs(180);
const DEFAULT_PAGE_FETCH_CONCURRENCY: usize = 5;

/// Configuration of the [`HttpRequestAdapter`](crate::HttpRequestAdapter).
///
/// `Default` honours the following environment variables:
///
/// * `GRAPH_BETA_BASE_URL` - service root, defaults to `https://graph.microsoft.com/beta`
/// * `GRAPH_BETA_MAX_RETRIES` - retries of throttled or unavailable responses, defaults to 3
/// * `LOG_GRAPH_REQUESTS` - any non-empty value logs every request and response
#[derive(Debug, Clone)]
pub struct AdapterOptions {
    pub base_url: String,
    /// Headers sent with every request.
    pub headers: HeaderMap,
    pub connect_timeout: Duration,
    /// Overall timeout of a single request; `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub max_retries: u32,
    /// Delay before the first retry when the service sends no `Retry-After`.
    pub retry_delay: Duration,
    /// Upper bound of a single delay and of the delays summed over all retries.
    pub max_retry_delay: Duration,
    /// Concurrent requests issued by bulk page fetches.
    pub page_fetch_concurrency: usize,
    pub log_requests: bool,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        let base_url = std::env::var("GRAPH_BETA_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let max_retries = std::env::var("GRAPH_BETA_MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_RETRIES);

        let log_requests = std::env::var("LOG_GRAPH_REQUESTS")
            .map(|s| !s.is_empty())
            .unwrap_or(false);

        AdapterOptions {
            base_url,
            headers: HeaderMap::new(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
            max_retries,
            retry_delay: DEFAULT_RETRY_DELAY,
            max_retry_delay: DEFAULT_MAX_RETRY_DELAY,
            page_fetch_concurrency: DEFAULT_PAGE_FETCH_CONCURRENCY,
            log_requests,
        }
    }
}

impl AdapterOptions {
    /// Options without a request timeout, for long-running downloads.
    pub fn no_timeout(self) -> Self {
        Self {
            request_timeout: None,
            ..self
        }
    }
}
