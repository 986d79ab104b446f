use crate::error::ForwardError;
use crate::payload::LogBatch;
use chrono::Utc;
use serde::Serialize;

pub const LOG_TYPE: &str = "aws_log_group";

/// Document posted to the collector: the whole batch plus one invocation's output.
#[derive(Debug, Serialize)]
pub struct ForwardedRecord<'a> {
    #[serde(flatten)]
    batch: &'a LogBatch,
    timestamp: i64,
    message: String,
    log_type: &'static str,
}

impl<'a> ForwardedRecord<'a> {
    pub fn new(batch: &'a LogBatch, timestamp: i64, message: String) -> Self {
        ForwardedRecord {
            batch,
            timestamp,
            message,
            log_type: LOG_TYPE,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, ForwardError> {
        serde_json::to_vec(self).map_err(ForwardError::Serialize)
    }
}

/// Timestamp of the first log line, or now when the batch has no lines.
pub fn batch_timestamp(batch: &LogBatch) -> i64 {
    batch
        .log_events
        .first()
        .map(|event| event.timestamp)
        .unwrap_or_else(|| Utc::now().timestamp_millis())
}
