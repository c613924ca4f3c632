//! Event Publisher Implementations
//!
//! ## Available Publishers
//!
//! | Publisher | Type | Description |
//! |-----------|------|-------------|
//! | [`NullEventPublisher`] | Disabled | Discards all events |
//! | [`TokioBroadcastEventBus`] | In-Process | Tokio broadcast channels |

pub mod null;
pub mod tokio;

pub use null::NullEventPublisher;
pub use self::tokio::{DomainEventStream, TokioBroadcastEventBus};

pub use tny_domain::events::DomainEvent;
