//! Infrastructure Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | IdGenerator | Allocates identifiers for new entities |
//! | EventPublisher | Publishes domain events after committed changes |

/// Event publisher port
pub mod events;
/// Identifier generator port
pub mod id_generator;

pub use events::EventPublisher;
pub use id_generator::IdGenerator;
