pub mod chunk;
pub mod collector;
pub mod config;
pub mod error;
pub mod payload;
pub mod record;

pub use collector::{Collector, HttpCollector};
pub use config::Config;
pub use error::{ConfigError, DecodeError, ForwardError};
pub use payload::{LogBatch, LogsEvent};

use chunk::split_invocations;
use record::{batch_timestamp, ForwardedRecord};
use serde_json::Value;

/// Relays CloudWatch Logs batches to a collector, one record per function invocation.
pub struct Forwarder<C> {
    collector: C,
}

impl<C: Collector> Forwarder<C> {
    pub fn new(collector: C) -> Self {
        Forwarder { collector }
    }

    /// Handles one subscription event. Returns the number of records sent.
    pub async fn handle(&self, event: Value) -> Result<usize, ForwardError> {
        let batch = LogsEvent::from_value(event)?.into_batch()?;

        log::info!(
            "Log group: {}, log stream: {}, {} log events",
            batch.log_group.as_deref().unwrap_or_default(),
            batch.log_stream.as_deref().unwrap_or_default(),
            batch.log_events.len()
        );

        let sent = self.forward(&batch).await?;
        log::info!("Successfully forwarded {} records.", sent);

        Ok(sent)
    }

    /// Posts each completed invocation of the batch, in order. Stops at the
    /// first failure; records already posted are not revisited.
    pub async fn forward(&self, batch: &LogBatch) -> Result<usize, ForwardError> {
        let timestamp = batch_timestamp(batch);
        let mut sent = 0;

        for chunk in split_invocations(&batch.log_events) {
            let message = match chunk.message() {
                Some(message) => message,
                None => {
                    log::debug!("Skipping blank chunk of {} lines", chunk.lines().len());
                    continue;
                }
            };

            let body = ForwardedRecord::new(batch, timestamp, message).to_json()?;
            self.collector.post(body).await?;
            sent += 1;
        }

        Ok(sent)
    }
}
