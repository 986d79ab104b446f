use crate::error::{DecodeError, ForwardError};
use aws_lambda_events::event::cloudwatch_logs::{CloudwatchLogsData, CloudwatchLogsLogEvent};
use flate2::read::GzDecoder;
use serde::Deserialize;
use serde_json::Value;
use std::io::prelude::*;

pub type LogBatch = CloudwatchLogsData;
pub type LogLine = CloudwatchLogsLogEvent;

/// CloudWatch Logs subscription event as delivered to the function.
#[derive(Debug, Deserialize)]
pub struct LogsEvent {
    #[serde(rename = "awslogs")]
    pub aws_logs: AwsLogs,
}

#[derive(Debug, Deserialize)]
pub struct AwsLogs {
    pub data: LogsData,
}

/// `data` is base64(gzip(json)) on a subscription delivery, but some
/// delivery paths hand over the batch already parsed.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LogsData {
    Encoded(String),
    Decoded(LogBatch),
}

impl LogsEvent {
    pub fn from_value(value: Value) -> Result<Self, ForwardError> {
        serde_json::from_value(value).map_err(ForwardError::Parse)
    }

    pub fn into_batch(self) -> Result<LogBatch, ForwardError> {
        match self.aws_logs.data {
            LogsData::Encoded(data) => Ok(decode(&data)?),
            LogsData::Decoded(batch) => Ok(batch),
        }
    }
}

pub fn decode(data: &str) -> Result<LogBatch, DecodeError> {
    let bytes = base64::decode(data)?;

    let mut decoder = GzDecoder::new(&bytes[..]);
    let mut json = Vec::new();
    decoder.read_to_end(&mut json).map_err(DecodeError::Gzip)?;

    serde_json::from_slice(&json).map_err(DecodeError::Json)
}
