//! HTTP dataset source

use async_trait::async_trait;
use slapworld_application::{DatasetResponse, DatasetSource, LoadError};
use std::time::Duration;
use tracing::trace;

/// Fetches datasets relative to a base URL
pub struct HttpDatasetSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDatasetSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("slap-the-world/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url_for(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            resource.trim_start_matches("./")
        )
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self, resource: &str) -> Result<DatasetResponse, LoadError> {
        let url = self.url_for(resource);
        trace!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::transport(resource, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::transport(resource, e))?;

        Ok(DatasetResponse::new(status, body.to_vec()))
    }

    fn locate(&self, resource: &str) -> String {
        self.url_for(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let source = HttpDatasetSource::new("https://example.com/data/").unwrap();
        assert_eq!(
            source.locate("./countries.json"),
            "https://example.com/data/countries.json"
        );
    }
}
