use crate::error::ConfigError;
use reqwest::header::HeaderValue;
use reqwest::Url;
use std::env;

pub const ENV_PRIVATE_KEY: &str = "PRIVATE_KEY";
pub const ENV_ENDPOINT: &str = "ENDPOINT";
pub const DEFAULT_ENDPOINT: &str =
    "https://oymowcc5rtovayochpt5m6nie40rzzfl.lambda-url.us-west-2.on.aws/";

/// Process-wide settings, read once before the runtime starts polling for events.
#[derive(Debug, Clone)]
pub struct Config {
    private_key: HeaderValue,
    endpoint: Url,
}

impl Config {
    pub fn new(private_key: &str, endpoint: &str) -> Result<Self, ConfigError> {
        if private_key.is_empty() {
            return Err(ConfigError::Missing(ENV_PRIVATE_KEY));
        }

        let mut private_key = HeaderValue::from_str(private_key)
            .map_err(|_| ConfigError::InvalidHeader(ENV_PRIVATE_KEY))?;
        private_key.set_sensitive(true);

        let endpoint = Url::parse(endpoint).map_err(|err| ConfigError::InvalidEndpoint {
            url: endpoint.into(),
            source: err.into(),
        })?;

        Ok(Config {
            private_key,
            endpoint,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let private_key = lookup(ENV_PRIVATE_KEY)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(ENV_PRIVATE_KEY))?;
        let endpoint = lookup(ENV_ENDPOINT)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.into());

        Self::new(&private_key, &endpoint)
    }

    pub fn private_key(&self) -> &HeaderValue {
        &self.private_key
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
