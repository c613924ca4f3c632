//! Tokio Broadcast Event Bus
//!
//! In-process event distribution over a tokio broadcast channel.
//! Events are not persisted; a subscriber that falls behind by more than
//! the channel capacity skips the oldest events.
//!
//! ## Example
//!
//! ```ignore
//! use tny_providers::events::TokioBroadcastEventBus;
//!
//! let bus = TokioBroadcastEventBus::new();
//! let mut events = bus.subscribe();
//! bus.publish(DomainEvent::CacheInvalidated { key: "tenant-config:acme".into() }).await?;
//! ```

use crate::constants::EVENT_BUS_DEFAULT_CAPACITY;
use async_trait::async_trait;
use futures::Stream;
use futures::stream;
use std::pin::Pin;
use std::sync::Arc;
use tny_domain::error::Result;
use tny_domain::events::DomainEvent;
use tny_domain::ports::EventPublisher;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Boxed async stream of domain events
pub type DomainEventStream = Pin<Box<dyn Stream<Item = DomainEvent> + Send + 'static>>;

/// Event bus using tokio broadcast channels
#[derive(Clone)]
pub struct TokioBroadcastEventBus {
    sender: Arc<broadcast::Sender<DomainEvent>>,
    capacity: usize,
}

impl TokioBroadcastEventBus {
    /// Create a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> DomainEventStream {
        let receiver = self.sender.subscribe();

        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Event stream lagged by {} events", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Box::pin(stream)
    }
}

impl Default for TokioBroadcastEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioBroadcastEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioBroadcastEventBus")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl EventPublisher for TokioBroadcastEventBus {
    async fn publish(&self, event: DomainEvent) -> Result<()> {
        let name = event.name();
        match self.sender.send(event) {
            Ok(count) => debug!(event = name, subscribers = count, "Published event"),
            Err(_) => debug!(event = name, "Published event but no subscribers"),
        }
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}
