//! Module for core business logic services.
//!
//! Holds the event-publishing side channel: the publisher capability used
//! by the todo handlers and the consumer counterpart available for
//! tooling.

pub mod event_consumer;
pub mod event_publisher;
