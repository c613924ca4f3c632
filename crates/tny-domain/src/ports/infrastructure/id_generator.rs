//! Identifier Generator Port

use std::fmt;
use uuid::Uuid;

/// Allocates identifiers for new entities
///
/// Implementations live in `tny-providers` (time-ordered v7 and random v4).
pub trait IdGenerator: Send + Sync + fmt::Debug {
    /// Create a new, unique identifier
    fn create(&self) -> Uuid;
}
