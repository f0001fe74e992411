use std::time::Duration;

use async_trait::async_trait;

use super::{DocumentSource, SourceError};

/// Document source backed by an HTTP endpoint.
///
/// One GET per fetch, no retry. A failed fetch is reported once by the
/// caller and the corresponding feature degrades for the session.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Unreachable(format!("{}: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Unreachable(format!(
                "{}: HTTP {}",
                self.url,
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Unreachable(format!("{}: {}", self.url, e)))
    }

    fn describe(&self) -> String {
        format!("http:{}", self.url)
    }
}
