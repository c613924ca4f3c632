//! Null event publisher

use async_trait::async_trait;
use tny_domain::error::Result;
use tny_domain::events::DomainEvent;
use tny_domain::ports::EventPublisher;

/// Event publisher that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventPublisher;

impl NullEventPublisher {
    /// Create a new null publisher
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for NullEventPublisher {
    async fn publish(&self, _event: DomainEvent) -> Result<()> {
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        false
    }
}
