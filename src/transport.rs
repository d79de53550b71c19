use anyhow::{Context, Result};
use log::debug;
use reqwest::Url;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::config::ClientConfig;

/// Performs a single GET and hands back the raw body.
///
/// Implementations must not inspect the status code: a 4xx/5xx body is
/// returned like any other. Errors are reserved for requests that never
/// produced a complete body (connect failure, timeout, truncated read).
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<Vec<u8>> {
        (**self).get(url)
    }
}

/// [`Transport`] backed by a blocking `reqwest` client.
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    pub fn new(cfg: &ClientConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&cfg.user_agent)
                .with_context(|| format!("invalid user agent: {:?}", cfg.user_agent))?,
        );

        let http = HttpClient::builder()
            .default_headers(default_headers)
            .timeout(cfg.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<Vec<u8>> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .with_context(|| format!("could not connect (url={})", url))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .with_context(|| format!("failed to read response body (url={}, status={})", url, status))?;

        debug!("{} {} ({} bytes)", status, url, body.len());
        Ok(body.to_vec())
    }
}
