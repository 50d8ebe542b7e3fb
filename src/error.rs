use thiserror::Error;

/// Errors produced by fixed-capacity set operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Every slot is occupied or tombstoned and the element is not already
    /// a member, so there is nowhere to put it. The table never grows.
    #[error("set is at capacity ({capacity} slots)")]
    CapacityExceeded { capacity: usize },
}
