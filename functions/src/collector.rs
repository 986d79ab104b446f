use crate::config::Config;
use crate::error::ForwardError;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

/// Destination for serialized records.
#[async_trait]
pub trait Collector {
    async fn post(&self, body: Vec<u8>) -> Result<(), ForwardError>;
}

/// Posts records to the configured HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpCollector {
    client: reqwest::Client,
    config: Config,
}

impl HttpCollector {
    pub fn new(config: Config) -> Self {
        HttpCollector {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Collector for HttpCollector {
    async fn post(&self, body: Vec<u8>) -> Result<(), ForwardError> {
        let response = self
            .client
            .post(self.config.endpoint().clone())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.config.private_key().clone())
            .body(body)
            .send()
            .await
            .map_err(|err| ForwardError::Transport(err.into()))?;

        // The collector's answer does not affect the invocation.
        log::debug!(
            "POST {} {}",
            self.config.endpoint(),
            response.status().as_str()
        );

        Ok(())
    }
}
