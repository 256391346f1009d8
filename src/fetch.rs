use std::time::Duration;

use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

/// A failed fetch is recovered by the caller: the URL contributes zero
/// records and the pipeline continues.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: StatusCode },
}

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(PageFetcher { client })
    }

    /// One best-effort round trip, no retries.
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_client_with_custom_agent() {
        let fetcher = PageFetcher::new("TestAgent/1.0", Duration::from_secs(5));
        assert!(fetcher.is_ok());
    }

    #[test]
    fn refused_connection_is_a_network_error() {
        let fetcher = PageFetcher::new("TestAgent/1.0", Duration::from_secs(1)).unwrap();
        // Reserved TEST-NET-1 address; nothing listens there.
        let err = fetcher.fetch("http://192.0.2.1:1/").unwrap_err();
        assert!(matches!(err, FetchError::Network { .. }));
    }
}
