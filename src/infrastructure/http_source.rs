// HTTP JSON data source
use crate::application::data_source::{DataSource, SourceError};
use crate::domain::observation::Observation;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpDataSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDataSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    fn name(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Observation>, SourceError> {
        tracing::debug!("Fetching observations from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        Ok(serde_json::from_slice(&body)?)
    }
}
