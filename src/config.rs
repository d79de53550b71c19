use std::time::Duration;

pub(crate) const DEFAULT_URL: &str = "https://eonet.sci.gsfc.nasa.gov/api/v3";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base EONET API URL, typically `https://eonet.sci.gsfc.nasa.gov/api/v3`.
    pub url: String,
    /// Per-request timeout, covering connect through reading the body.
    pub timeout: Duration,
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("eonet-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
