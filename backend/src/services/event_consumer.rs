//! Kafka consumer counterpart of the event publisher.
//!
//! Not wired into any request path; kept for tooling and local inspection
//! of the event stream.

use std::time::Duration;

use anyhow::Context;
use rdkafka::ClientConfig;
use rdkafka::Message;
use rdkafka::consumer::{Consumer, StreamConsumer};
use tracing::{error, info};

use crate::config::Config;

pub struct KafkaEventConsumer {
    consumer: StreamConsumer,
    topic: String,
}

impl KafkaEventConsumer {
    /// Create a consumer subscribed to the configured topic.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &config.kafka_broker)
            .set("group.id", "todo-consumer-group")
            .set("auto.offset.reset", "earliest")
            .create()
            .context("Failed to create Kafka consumer")?;

        consumer
            .subscribe(&[&config.kafka_topic])
            .context("Failed to subscribe to Kafka topic")?;

        Ok(KafkaEventConsumer {
            consumer,
            topic: config.kafka_topic.clone(),
        })
    }

    /// Receive a single message, parsed as JSON.
    ///
    /// Timeouts, consumer errors, and malformed payloads are logged and
    /// yield `None`.
    pub async fn consume_one(&self, timeout: Duration) -> Option<serde_json::Value> {
        let message = match tokio::time::timeout(timeout, self.consumer.recv()).await {
            Ok(Ok(message)) => message,
            Ok(Err(e)) => {
                error!("Consumer error: {}", e);
                return None;
            }
            Err(_elapsed) => return None,
        };

        let payload = message
            .payload()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())?;

        match serde_json::from_str(payload) {
            Ok(value) => {
                info!("Message consumed from {}: {}", self.topic, value);
                Some(value)
            }
            Err(e) => {
                error!("Error parsing consumed message: {}", e);
                None
            }
        }
    }
}
