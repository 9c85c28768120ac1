//! Collections of objects ranked by promotable priorities.
//!
//! A [`PriorityCollection`] stores objects of any type (including types that cannot be cloned),
//! hands out a stable [`Id`] for each, and supports exactly one way of reordering them: raising an
//! object's priority by one. The object of greatest priority can be inspected or popped at any
//! time; among equal priorities, the most recently added object wins.
//!
//! ```rust
//! # use priority_collection::PriorityCollection;
//! let mut strings: PriorityCollection<String> = PriorityCollection::new();
//! let ids = strings.add_range(["white", "yellow", "red"].map(String::from));
//! let (yellow, red) = (ids[1], ids[2]);
//!
//! strings.promote(yellow);
//! strings.promote(red);
//! strings.promote(red);
//! assert_eq!(strings.get_max(), (&"red".to_string(), 2));
//!
//! strings.promote(yellow);
//! assert_eq!(strings.pop_max(), ("red".to_string(), 2));
//! assert_eq!(strings.pop_max(), ("yellow".to_string(), 2));
//! assert_eq!(strings.pop_max(), ("white".to_string(), 0));
//! assert!(!strings.is_valid(red));
//! ```
//!
//! Priorities default to `usize`. Any unsigned integer type can be used instead (see
//! [`Priority`]), and [`big::BigPriorityCollection`] never overflows.
//!
//! Operations are logged through the [`log`] facade at `trace` level; rejected `try_*` calls are
//! logged at `debug` level.
mod collection;
mod error;
mod id;
mod priority;
mod slot;

pub mod big;

pub use crate::collection::PriorityCollection;
pub use crate::error::{Error, Result};
pub use crate::id::Id;
pub use crate::priority::Priority;
