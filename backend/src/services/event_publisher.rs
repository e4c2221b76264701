//! Best-effort publishing of todo-change events to Kafka.
//!
//! Publishing is fire-and-forget: `publish` reports only whether the send
//! was accepted locally, delivery outcomes are logged at debug severity on
//! a background task, and no failure on this path ever reaches the HTTP
//! response. There are no retry, ordering, or delivery guarantees.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rdkafka::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::api::todo::models::Todo;
use crate::config::Config;

/// A todo-change notification sent to the broker.
///
/// The `event` tag names the action; the payload carries the fields
/// consumers need to mirror the change.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TodoEvent {
    #[serde(rename = "todo_created")]
    Created {
        id: u64,
        title: String,
        description: Option<String>,
        completed: bool,
        created_at: DateTime<Utc>,
        created_by: String,
    },
    #[serde(rename = "todo_updated")]
    Updated {
        id: u64,
        title: String,
        description: Option<String>,
        completed: bool,
        updated_at: DateTime<Utc>,
        updated_by: String,
    },
    #[serde(rename = "todo_deleted")]
    Deleted { id: u64, deleted_by: String },
}

impl TodoEvent {
    pub fn created(todo: &Todo, created_by: impl Into<String>) -> Self {
        TodoEvent::Created {
            id: todo.id,
            title: todo.title.clone(),
            description: todo.description.clone(),
            completed: todo.completed,
            created_at: todo.created_at,
            created_by: created_by.into(),
        }
    }

    pub fn updated(todo: &Todo, updated_by: impl Into<String>) -> Self {
        TodoEvent::Updated {
            id: todo.id,
            title: todo.title.clone(),
            description: todo.description.clone(),
            completed: todo.completed,
            updated_at: todo.updated_at,
            updated_by: updated_by.into(),
        }
    }

    pub fn deleted(id: u64, deleted_by: impl Into<String>) -> Self {
        TodoEvent::Deleted {
            id,
            deleted_by: deleted_by.into(),
        }
    }

    /// Message key: the todo id, so all events for one todo land on the
    /// same partition.
    pub fn key(&self) -> String {
        match self {
            TodoEvent::Created { id, .. }
            | TodoEvent::Updated { id, .. }
            | TodoEvent::Deleted { id, .. } => id.to_string(),
        }
    }
}

/// Fire-and-forget event sink.
///
/// `publish` must never surface an error to the request path; the returned
/// bool means "accepted locally", not "delivered".
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &TodoEvent) -> bool;

    /// Best-effort flush with a short bounded timeout; errors are
    /// swallowed.
    async fn close(&self);
}

/// Kafka-backed publisher.
pub struct KafkaEventPublisher {
    producer: FutureProducer,
    topic: String,
}

impl KafkaEventPublisher {
    /// Create the producer. This does not connect to the broker; an
    /// unreachable broker only shows up later as debug-logged delivery
    /// failures.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.kafka_broker)
            .set("client.id", "todo-producer")
            .set("message.timeout.ms", "2000")
            .set("socket.timeout.ms", "2000")
            .create()
            .context("Failed to create Kafka producer")?;

        Ok(KafkaEventPublisher {
            producer,
            topic: config.kafka_topic.clone(),
        })
    }
}

#[async_trait]
impl EventPublisher for KafkaEventPublisher {
    async fn publish(&self, event: &TodoEvent) -> bool {
        let payload = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                error!("Error serializing event: {}", e);
                return false;
            }
        };
        let key = event.key();

        let record = FutureRecord::to(&self.topic).key(&key).payload(&payload);
        match self.producer.send_result(record) {
            Ok(delivery) => {
                info!("Message queued for publishing to {}: {}", self.topic, payload);
                // Await the delivery callback off the request path. Debug
                // severity only, to avoid log noise when the broker is
                // unreachable.
                tokio::spawn(async move {
                    match delivery.await {
                        Ok(Ok((partition, offset))) => {
                            debug!("Message delivered to partition {} at offset {}", partition, offset);
                        }
                        Ok(Err((e, _message))) => debug!("Message delivery failed: {}", e),
                        Err(_) => debug!("Message delivery result was dropped"),
                    }
                });
                true
            }
            Err((e, _record)) => {
                error!("Error publishing message to Kafka: {}", e);
                false
            }
        }
    }

    async fn close(&self) {
        // Short timeout to avoid hanging shutdown when Kafka is
        // unavailable.
        if let Err(e) = self.producer.flush(Timeout::After(Duration::from_secs(1))) {
            debug!("Error closing Kafka producer: {}", e);
        }
    }
}
