//! Collections with unbounded priorities.
//!
//! Primitive priority counters eventually overflow; [`BigUint`] never does, at the cost of an
//! allocation per priority once it outgrows a machine word.
pub use num::bigint::BigUint;

use crate::PriorityCollection;

/// A [`PriorityCollection`] whose priorities can be promoted without bound.
///
/// ```rust
/// # use priority_collection::big::{BigPriorityCollection, BigUint};
/// let mut c: BigPriorityCollection<&str> = BigPriorityCollection::new();
/// let id = c.add("unbounded");
/// c.promote(id);
/// assert_eq!(c.pop_max(), ("unbounded", BigUint::from(1_u8)));
/// ```
pub type BigPriorityCollection<T> = PriorityCollection<T, BigUint>;
