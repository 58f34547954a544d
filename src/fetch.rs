//! HTTP GET seam for package and bundle repositories
//!
//! Locators never talk to `reqwest` directly: they go through [`Fetcher`],
//! which maps a 404 to [`MuranoError::ResourceNotFound`] so callers can tell
//! "not there" apart from "could not ask".

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::error::{MuranoError, Result, http};

/// Fetches raw bytes by URL
pub trait Fetcher {
    /// Download `url`, failing with `ResourceNotFound` on a 404
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP fetcher used against real repositories
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the given request timeout (`None` for no timeout)
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("murano/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| http::transport(url, e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(http::not_found(url));
        }
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unexpected status");
            return Err(http::status(url, status.as_u16(), reason));
        }

        let bytes = response
            .bytes()
            .map_err(|e| http::transport(url, e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// True if `identifier` is an absolute http(s) URL
pub fn is_url(identifier: &str) -> bool {
    reqwest::Url::parse(identifier)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Join a repository base URL with a relative path
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Convert a repository "not found" into the caller's own not-found error
pub fn map_not_found(err: MuranoError, not_found: impl FnOnce() -> MuranoError) -> MuranoError {
    if matches!(err, MuranoError::ResourceNotFound { .. }) {
        not_found()
    } else {
        err
    }
}
