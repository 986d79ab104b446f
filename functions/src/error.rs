use thiserror::Error;

/// Startup failures. These stop the process before the runtime loop begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("{0} is not a valid header value")]
    InvalidHeader(&'static str),
    #[error("invalid endpoint url {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Failures while turning the `awslogs.data` string into a batch.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to decode base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("failed to uncompress gzip data: {0}")]
    Gzip(#[source] std::io::Error),
    #[error("failed to unmarshal JSON: {0}")]
    Json(#[source] serde_json::Error),
}

impl DecodeError {
    pub fn stage(&self) -> &'static str {
        match self {
            DecodeError::Base64(_) => "base64",
            DecodeError::Gzip(_) => "gzip",
            DecodeError::Json(_) => "json",
        }
    }
}

/// Per-invocation failures. Any of these aborts the rest of the invocation.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("failed to parse AWSLogs: {0}")]
    Parse(#[source] serde_json::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("failed to marshal record: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to send request: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}
