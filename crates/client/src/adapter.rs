use std::sync::Arc;
use std::time::Duration;

use graph_beta_models::ODataError;
use graph_beta_serialization::{ParsableFactory, parse_object};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, Response, StatusCode};
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::auth::{AccessTokenProvider, AnonymousTokenProvider};
use crate::error::GraphError;
use crate::options::AdapterOptions;
use crate::request::RequestInformation;

const RETRY_ATTEMPT_HEADER: &str = "Retry-Attempt";
const REQUEST_ID_HEADER: &str = "request-id";

fn is_retryable(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

/// Sends [`RequestInformation`]s and turns responses into models.
///
/// Throttled and temporarily unavailable responses are retried; error
/// responses are mapped to [`GraphError::Service`].
#[derive(Debug, Clone)]
pub struct HttpRequestAdapter {
    client: Client,
    base_url: Url,
    options: AdapterOptions,
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl HttpRequestAdapter {
    /// Adapter sending unauthenticated requests.
    pub fn new(options: AdapterOptions) -> Result<Self, GraphError> {
        Self::with_token_provider(options, Arc::new(AnonymousTokenProvider))
    }

    #[instrument(skip(options, token_provider), fields(base_url = %options.base_url))]
    pub fn with_token_provider(
        options: AdapterOptions,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, GraphError> {
        let base_url = Url::parse(&options.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(GraphError::Config(format!(
                "{} cannot be a base URL",
                options.base_url
            )));
        }

        let mut builder = Client::builder()
            .default_headers(options.headers.clone())
            .connect_timeout(options.connect_timeout);
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GraphError::Config(format!("failed to build HTTP client: {e}")))?;

        debug!("Created request adapter");
        Ok(Self {
            client,
            base_url,
            options,
            token_provider,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn options(&self) -> &AdapterOptions {
        &self.options
    }

    /// Sends the request and parses the response body with the factory of `T`.
    ///
    /// Returns `Ok(None)` for `204 No Content` and empty bodies.
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    pub async fn send<T: ParsableFactory>(
        &self,
        request: RequestInformation,
    ) -> Result<Option<T>, GraphError> {
        let response = self.execute(&request).await?;
        let response = Self::throw_if_failed(response).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.bytes().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            GraphError::from(e)
        })?;
        if body.is_empty() {
            return Ok(None);
        }

        let value = parse_object::<T>(&body).map_err(|e| {
            error!(error = %e, "Failed to parse response");
            GraphError::from(e)
        })?;
        Ok(Some(value))
    }

    /// Sends a request whose response carries no model.
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    pub async fn send_no_content(&self, request: RequestInformation) -> Result<(), GraphError> {
        let response = self.execute(&request).await?;
        Self::throw_if_failed(response).await?;
        Ok(())
    }

    async fn execute(&self, request: &RequestInformation) -> Result<Response, GraphError> {
        let mut attempt = 0u32;
        let mut cumulative_delay = Duration::ZERO;

        loop {
            let mut builder = self
                .client
                .request(request.method().clone(), request.url().clone())
                .headers(request.headers().clone());
            if let Some(token) = self
                .token_provider
                .get_authorization_token(request.url())
                .await?
            {
                builder = builder.bearer_auth(token);
            }
            if attempt > 0 {
                builder = builder.header(RETRY_ATTEMPT_HEADER, attempt.to_string());
            }
            if let Some(content) = request.content() {
                builder = builder.body(content.to_vec());
            }

            let response = builder.send().await.map_err(|e| {
                error!(error = %e, "Request failed");
                GraphError::from(e)
            })?;
            self.log_response(request, &response);

            let status = response.status();
            if is_retryable(status)
                && attempt < self.options.max_retries
                && cumulative_delay < self.options.max_retry_delay
            {
                attempt += 1;
                let delay = self.retry_delay(response.headers(), attempt);
                cumulative_delay += delay;
                warn!(
                    "Request returned {}, retry {} of {} in {}ms",
                    status.as_u16(),
                    attempt,
                    self.options.max_retries,
                    delay.as_millis()
                );
                sleep(delay).await;
                continue;
            }

            return Ok(response);
        }
    }

    /// `Retry-After` seconds when present, otherwise the configured delay in
    /// seconds raised to the attempt number (3s, 9s, 27s, ...). Delays under a
    /// second are not scaled. Capped at the maximum retry delay.
    fn retry_delay(&self, headers: &HeaderMap, attempt: u32) -> Duration {
        let max = self.options.max_retry_delay.as_secs_f64();
        let retry_after = headers
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0);

        let secs = match retry_after {
            Some(secs) => secs,
            None => {
                let base = self.options.retry_delay.as_secs_f64();
                if base < 1.0 {
                    base
                } else {
                    base.powi(i32::try_from(attempt).unwrap_or(i32::MAX))
                }
            }
        };
        Duration::from_secs_f64(secs.min(max))
    }

    fn log_response(&self, request: &RequestInformation, response: &Response) {
        let status = response.status();
        if self.options.log_requests {
            if status.is_success() {
                debug!(
                    method = %request.method(),
                    status = status.as_u16(),
                    url = %request.url(),
                    "2xx graph api response"
                );
            } else {
                error!(
                    method = %request.method(),
                    status = status.as_u16(),
                    url = %request.url(),
                    headers = ?response.headers(),
                    "non-2xx graph api response"
                );
            }
            return;
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            info!(method = %request.method(), url = %request.url(), "graph api throttling");
        } else if !status.is_success() {
            info!(
                status = status.as_u16(),
                method = %request.method(),
                url = %request.url(),
                "graph api error"
            );
        }
    }

    async fn throw_if_failed(response: Response) -> Result<Response, GraphError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let header_request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    status = status.as_u16(),
                    error = %e,
                    "Failed to read error response body"
                );
                Default::default()
            }
        };
        let odata = ODataError::from_response_body(&body);

        let code = odata
            .as_ref()
            .and_then(ODataError::code)
            .map(String::from)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
        let message = odata
            .as_ref()
            .and_then(ODataError::message)
            .map(String::from)
            .unwrap_or_else(|| String::from_utf8_lossy(&body).into_owned());
        let request_id = odata
            .as_ref()
            .and_then(ODataError::request_id)
            .map(String::from)
            .or(header_request_id);

        error!(status = status.as_u16(), code = %code, "Service returned an error");
        Err(GraphError::Service {
            status: status.as_u16(),
            code,
            message,
            request_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serial_test::serial;
    use test_log::test;

    fn adapter(retry_delay: Duration, max_retry_delay: Duration) -> HttpRequestAdapter {
        HttpRequestAdapter::new(AdapterOptions {
            base_url: "http://localhost/beta".to_string(),
            retry_delay,
            max_retry_delay,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    #[serial]
    fn test_retry_delay_is_raised_to_the_attempt() {
        let adapter = adapter(Duration::from_secs(3), Duration::from_secs(180));
        let headers = HeaderMap::new();
        assert_eq!(adapter.retry_delay(&headers, 1), Duration::from_secs(3));
        assert_eq!(adapter.retry_delay(&headers, 2), Duration::from_secs(9));
        assert_eq!(adapter.retry_delay(&headers, 3), Duration::from_secs(27));
        assert_eq!(adapter.retry_delay(&headers, 5), Duration::from_secs(180));
        assert_eq!(adapter.retry_delay(&headers, 400), Duration::from_secs(180));
    }

    #[test]
    #[serial]
    fn test_sub_second_retry_delay_is_not_scaled() {
        let adapter = adapter(Duration::from_millis(250), Duration::from_secs(180));
        let headers = HeaderMap::new();
        assert_eq!(adapter.retry_delay(&headers, 1), Duration::from_millis(250));
        assert_eq!(adapter.retry_delay(&headers, 3), Duration::from_millis(250));
    }

    #[test]
    #[serial]
    fn test_retry_after_is_honoured_and_capped() {
        let adapter = adapter(Duration::from_secs(3), Duration::from_secs(180));
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("2"));
        assert_eq!(adapter.retry_delay(&headers, 1), Duration::from_secs(2));

        headers.insert(RETRY_AFTER, HeaderValue::from_static("3600"));
        assert_eq!(adapter.retry_delay(&headers, 1), Duration::from_secs(180));

        // HTTP dates are not supported and fall back to the configured delay
        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert_eq!(adapter.retry_delay(&headers, 2), Duration::from_secs(9));
    }

    #[test]
    #[serial]
    fn test_invalid_base_url() {
        let result = HttpRequestAdapter::new(AdapterOptions {
            base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(GraphError::Config(_))));

        let result = HttpRequestAdapter::new(AdapterOptions {
            base_url: "mailto:someone@contoso.com".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(GraphError::Config(_))));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable(StatusCode::GATEWAY_TIMEOUT));
        assert!(!is_retryable(StatusCode::NOT_FOUND));
        assert!(!is_retryable(StatusCode::BAD_GATEWAY));
    }
}
