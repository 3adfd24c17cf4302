//! Candidate sources.
//!
//! The typeahead only ever consumes a flat list of strings. This module turns
//! the raw responses of a remote lookup into that list and provides the
//! asynchronous fetcher type the widget drives through its debounce pipeline.
//!
//! A remote endpoint is expected to answer with a JSON array of records, each
//! carrying at least a `name`:
//!
//! ```rust
//! use bubbletea_typeahead::source::candidates_from_json;
//!
//! let body = r#"[{"name": "Paris"}, {"id": 7}, {"name": "Parma", "pop": 1}]"#;
//! assert_eq!(candidates_from_json(body).unwrap(), vec!["Paris", "Parma"]);
//! ```

use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while obtaining candidates.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request could not be sent or the body could not be read.
    #[cfg(feature = "http")]
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The body was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The body was JSON but not an array of records.
    #[error("expected a JSON array of records")]
    NotAnArray,
}

/// Future resolving to a list of candidates.
pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Vec<String>, SourceError>> + Send>>;

/// Asynchronous candidate lookup keyed by the current query.
pub type FetchFn = Arc<dyn Fn(String) -> FetchFuture + Send + Sync>;

/// Wraps an async closure into a [`FetchFn`].
///
/// ```rust
/// use bubbletea_typeahead::source::fetcher_fn;
///
/// let countries = vec!["France".to_string(), "Finland".to_string()];
/// let fetch = fetcher_fn(move |_query| {
///     let countries = countries.clone();
///     async move { Ok::<_, bubbletea_typeahead::source::SourceError>(countries) }
/// });
/// # let _ = fetch;
/// ```
pub fn fetcher_fn<F, Fut>(f: F) -> FetchFn
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<String>, SourceError>> + Send + 'static,
{
    Arc::new(move |query| Box::pin(f(query)) as FetchFuture)
}

/// Extracts candidate names from a JSON array of records.
///
/// Records without a string `name` are skipped.
pub fn candidates_from_json(body: &str) -> Result<Vec<String>, SourceError> {
    let value: Value = serde_json::from_str(body)?;
    candidates_from_value(&value)
}

/// Same as [`candidates_from_json`] for an already parsed document.
pub fn candidates_from_value(value: &Value) -> Result<Vec<String>, SourceError> {
    let records = value.as_array().ok_or(SourceError::NotAnArray)?;
    Ok(records
        .iter()
        .filter_map(|r| r.get("name").and_then(Value::as_str))
        .map(str::to_owned)
        .collect())
}

#[cfg(feature = "http")]
pub use http::HttpSource;

#[cfg(feature = "http")]
mod http {
    use super::{candidates_from_value, FetchFn, FetchFuture, SourceError};
    use serde_json::Value;
    use std::sync::Arc;

    /// Placeholder replaced by the URL-encoded query.
    pub const QUERY_PLACEHOLDER: &str = "{query}";

    /// Candidates fetched with `GET` from an HTTP endpoint.
    ///
    /// The endpoint is a template: `{query}` is replaced by the URL-encoded
    /// query. A template without the placeholder is requested verbatim, for
    /// endpoints that always return the full list.
    #[derive(Debug, Clone)]
    pub struct HttpSource {
        template: String,
        client: reqwest::Client,
    }

    impl HttpSource {
        /// Creates a source for the given endpoint template.
        pub fn new(template: impl Into<String>) -> Self {
            Self {
                template: template.into(),
                client: reqwest::Client::new(),
            }
        }

        /// Uses a preconfigured client (timeouts, headers, proxies).
        pub fn with_client(mut self, client: reqwest::Client) -> Self {
            self.client = client;
            self
        }

        /// The URL requested for `query`.
        pub fn url_for(&self, query: &str) -> String {
            if self.template.contains(QUERY_PLACEHOLDER) {
                self.template
                    .replace(QUERY_PLACEHOLDER, &urlencoding::encode(query))
            } else {
                self.template.clone()
            }
        }

        /// Fetches and decodes the candidates for `query`.
        pub async fn fetch(&self, query: &str) -> Result<Vec<String>, SourceError> {
            let url = self.url_for(query);
            log::debug!("fetching candidates from {url}");
            let resp = self.client.get(&url).send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(SourceError::Status(status.as_u16()));
            }
            let body: Value = resp.json().await?;
            candidates_from_value(&body)
        }

        /// Adapts this source into a [`FetchFn`] for the typeahead.
        pub fn fetcher(self) -> FetchFn {
            let source = Arc::new(self);
            Arc::new(move |query: String| {
                let source = Arc::clone(&source);
                Box::pin(async move { source.fetch(&query).await }) as FetchFuture
            })
        }
    }

}
