//! Error types for the fallible collection operations.

use crate::Id;
use thiserror::Error;

/// Reasons an operation on a [`PriorityCollection`](crate::PriorityCollection) can be rejected.
///
/// Returned by the `try_*` methods; the plain methods panic with the same message instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The collection holds no live objects.
    #[error("priority collection is empty")]
    Empty,

    /// The identity was never assigned, or its object has already been popped.
    #[error("identity {0} does not refer to a live object")]
    InvalidId(Id),

    /// The priority counter cannot be incremented any further.
    #[error("priority of {0} overflowed")]
    PriorityOverflow(Id),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
