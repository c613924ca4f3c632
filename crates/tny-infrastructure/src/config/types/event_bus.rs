//! EventBus configuration types

use serde::{Deserialize, Serialize};
use tny_providers::constants::EVENT_BUS_DEFAULT_CAPACITY;

/// EventBus provider types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventBusProvider {
    /// In-process broadcast channel (Tokio)
    #[default]
    Tokio,
    /// Discard every event
    Null,
}

/// EventBus configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBusConfig {
    /// EventBus provider to use
    pub provider: EventBusProvider,

    /// Buffer capacity of the broadcast channel
    /// Number of events that can be buffered before the oldest are dropped
    pub capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            provider: EventBusProvider::Tokio,
            capacity: EVENT_BUS_DEFAULT_CAPACITY,
        }
    }
}
