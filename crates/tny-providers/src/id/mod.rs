//! Identifier Generators
//!
//! | Generator | Description |
//! |-----------|-------------|
//! | [`SequentialIdGenerator`] | Time-ordered UUID v7, index friendly |
//! | [`RandomIdGenerator`] | Random UUID v4 |

use tny_domain::ports::IdGenerator;
use uuid::Uuid;

/// Generates time-ordered UUID v7 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIdGenerator;

impl IdGenerator for SequentialIdGenerator {
    fn create(&self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Generates random UUID v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn create(&self) -> Uuid {
        Uuid::new_v4()
    }
}
