//! # Graph beta client
//!
//! Sends requests for the Graph beta models over HTTP.
//!
//! * [`HttpRequestAdapter`] executes requests, retrying throttled and
//!   unavailable responses and mapping error payloads to [`GraphError`].
//! * [`BetaService`] is the entry point: request builders for sites and their
//!   pages, model serialization and bulk page fetches.
//!
//! ## Configuration
//!
//! | Option                   | Env Variable             | Default                            |
//! |--------------------------|--------------------------|------------------------------------|
//! | base_url                 | GRAPH_BETA_BASE_URL      | `https://graph.microsoft.com/beta` |
//! | max_retries              | GRAPH_BETA_MAX_RETRIES   | 3                                  |
//! | log_requests             | LOG_GRAPH_REQUESTS       | false                              |
//! | connect_timeout          | -                        | 10s                                |
//! | request_timeout          | -                        | 3m                                 |
//! | retry_delay              | -                        | 3s                                 |
//! | max_retry_delay          | -                        | 180s                               |
//! | page_fetch_concurrency   | -                        | 5                                  |
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use graph_beta_client::{AdapterOptions, BetaService, HttpRequestAdapter, StaticTokenProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = StaticTokenProvider::new("<access token>")
//!         .with_allowed_hosts(["graph.microsoft.com"]);
//!     let adapter =
//!         HttpRequestAdapter::with_token_provider(AdapterOptions::default(), Arc::new(provider))
//!             .unwrap();
//!     let service = BetaService::new(adapter);
//!
//!     let pages = service.sites().by_id("root").pages().list_all(None).await.unwrap();
//!     for page in pages {
//!         println!("{:?}", page.title());
//!     }
//! }
//! ```

mod adapter;
mod auth;
pub mod error;
mod options;
mod request;
mod service;
pub mod sites;

pub use adapter::HttpRequestAdapter;
pub use auth::{AccessTokenProvider, AnonymousTokenProvider, StaticTokenProvider};
pub use error::GraphError;
pub use options::{AdapterOptions, DEFAULT_BASE_URL};
pub use request::{QueryParameters, RequestInformation};
pub use service::{BetaService, PageFetchFailure, SitePages};
