//! Internal storage of objects and their priorities.

use crate::{Id, Priority};
use slab::Slab;
use std::mem;

/// Contents of one slot: either a live object and its priority, or a tombstone left behind after
/// the object was popped.
#[derive(Debug)]
pub(crate) enum Slot<T, P> {
    Live { value: T, priority: P },
    Removed,
}

impl<T, P> Slot<T, P> {
    pub(crate) fn is_live(&self) -> bool {
        matches!(self, Slot::Live { .. })
    }
}

/// Slab of slots, indexed by [`Id`].
///
/// Slots are never removed from the slab, so keys are handed out densely starting at zero and the
/// slab key of an object doubles as its identity. Popping an object only swaps its slot for
/// [`Slot::Removed`].
#[derive(Debug)]
pub(crate) struct Slots<T, P> {
    slots: Slab<Slot<T, P>>,
}

impl<T, P: Priority> Slots<T, P> {
    pub(crate) fn new() -> Self {
        Self { slots: Slab::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
        }
    }

    /// Number of identities assigned so far, live or not.
    pub(crate) fn count(&self) -> usize {
        self.slots.len()
    }

    /// Store a new live object at the initial priority, returning its identity.
    pub(crate) fn insert(&mut self, value: T) -> Id {
        let expected = self.slots.vacant_key();
        let key = self.slots.insert(Slot::Live {
            value,
            priority: P::initial(),
        });

        // Nothing is ever removed from the slab, so there are no holes to fill.
        debug_assert_eq!(expected, key);
        debug_assert_eq!(key + 1, self.slots.len());

        key.into()
    }

    /// Retrieve a live slot's object and priority.
    pub(crate) fn get(&self, id: Id) -> Option<(&T, &P)> {
        match self.slots.get(id.index()) {
            Some(Slot::Live { value, priority }) => Some((value, priority)),
            _ => None,
        }
    }

    /// Retrieve a mutable reference to a live slot's priority.
    pub(crate) fn priority_mut(&mut self, id: Id) -> Option<&mut P> {
        match self.slots.get_mut(id.index()) {
            Some(Slot::Live { priority, .. }) => Some(priority),
            _ => None,
        }
    }

    /// Whether `id` has been assigned and not yet taken.
    pub(crate) fn is_live(&self, id: Id) -> bool {
        self.slots.get(id.index()).is_some_and(Slot::is_live)
    }

    /// Move the object out of a live slot, leaving [`Slot::Removed`] in its place.
    pub(crate) fn take(&mut self, id: Id) -> Option<(T, P)> {
        let slot = self.slots.get_mut(id.index())?;
        match mem::replace(slot, Slot::Removed) {
            Slot::Live { value, priority } => Some((value, priority)),
            Slot::Removed => None,
        }
    }
}
