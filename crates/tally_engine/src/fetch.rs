use async_trait::async_trait;
use thiserror::Error;

/// Transport-level failure while fetching the results document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("results url is invalid: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("network error: {0}")]
    Network(String),
}

/// One network round trip per call; no retry, no backoff. The next scheduled
/// poll tick is the only retry policy.
#[async_trait]
pub trait FeedClient: Send + Sync {
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Feed client backed by reqwest against a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpFeedClient {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HttpFeedClient {
    /// No request timeout is configured: a hung request stalls its own cycle
    /// without blocking later ticks.
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let url = reqwest::Url::parse(url).map_err(|err| FetchError::InvalidUrl(err.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            url,
        })
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))
    }
}
