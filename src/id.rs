//! Identities handed out by a [`PriorityCollection`](crate::PriorityCollection).
use std::fmt;

/// Opaque handle to an object stored in a [`PriorityCollection`](crate::PriorityCollection).
///
/// Identities are dense: the `n`-th object added to a collection receives `Id(n)`. They are never
/// reused, even after the object they name has been popped, so a stale `Id` can always be detected
/// with [`PriorityCollection::is_valid()`](crate::PriorityCollection::is_valid).
///
/// An `Id` is only meaningful for the collection that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(usize);

impl Id {
    /// Unwrap the underlying index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Id {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Id> for usize {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
