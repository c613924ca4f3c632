//! Event Publisher Port
//!
//! Services publish [`DomainEvent`]s after a change is committed. Delivery
//! is best effort: a publish failure never rolls back the change.

use crate::error::Result;
use crate::events::DomainEvent;
use async_trait::async_trait;

/// Publishes domain events to interested subscribers
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event
    async fn publish(&self, event: DomainEvent) -> Result<()>;

    /// Check if there are any active subscribers
    fn has_subscribers(&self) -> bool;
}
