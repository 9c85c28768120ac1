use num::{CheckedAdd, Unsigned};
use std::fmt::Debug;

/// Counter type used to rank objects in a [`PriorityCollection`](crate::PriorityCollection).
///
/// Priorities start at zero and only ever grow by one, so any unsigned integer type will do.
/// Primitive integers can overflow after enough promotions, which is reported as
/// [`Error::PriorityOverflow`](crate::Error::PriorityOverflow); use [`num::BigUint`] (see
/// [`big`](crate::big)) when priorities must be unbounded.
///
/// Implemented for every type satisfying the bounds.
pub trait Priority: Clone + Ord + Debug + Unsigned + CheckedAdd {
    /// Priority of freshly added objects.
    fn initial() -> Self {
        Self::zero()
    }

    /// The priority right after this one, or `None` if it is not representable.
    fn incremented(&self) -> Option<Self> {
        self.checked_add(&Self::one())
    }
}

impl<P> Priority for P where P: Clone + Ord + Debug + Unsigned + CheckedAdd {}
