//! The priority collection itself.
//!
//! See documentation for [`PriorityCollection`].

use crate::error::{Error, Result};
use crate::slot::Slots;
use crate::{Id, Priority};
use std::collections::BTreeSet;

/// A collection of objects ranked by promotable priorities.
///
/// Every object added to the collection receives an [`Id`] and starts at priority zero. Its
/// priority can then be raised one step at a time with [`promote()`](Self::promote), and the
/// object with the greatest priority can be inspected with [`get_max()`](Self::get_max) or removed
/// with [`pop_max()`](Self::pop_max). Among objects of equal priority, the one added last is the
/// greatest.
///
/// Objects are moved in and out of the collection, so `T` need not be [`Clone`].
///
/// ## Usage
///
/// ```rust
/// # use priority_collection::PriorityCollection;
/// let mut colors: PriorityCollection<&str> = PriorityCollection::new();
/// let white = colors.add("white");
/// let red = colors.add("red");
///
/// colors.promote(white);
/// assert_eq!(colors.get_max(), (&"white", 1));
///
/// assert_eq!(colors.pop_max(), ("white", 1));
/// assert!(!colors.is_valid(white));
/// assert_eq!(colors.pop_max(), ("red", 0));
/// assert!(colors.is_empty());
/// # let _ = red;
/// ```
///
/// ## Preconditions
///
/// [`get()`](Self::get), [`promote()`](Self::promote), [`get_max()`](Self::get_max) and
/// [`pop_max()`](Self::pop_max) expect a live identity or a non-empty collection, and panic when
/// that does not hold. Each has a `try_` counterpart that reports an [`Error`] instead.
///
/// ## Complexity
///
/// Objects live in a slab indexed by identity; an ordered set of `(priority, id)` pairs tracks
/// their ranking. Adding, promoting and popping take `O(log n)` time, and looking up an object by
/// identity takes constant time. Popped objects leave a tombstone behind so that identities are
/// never reused.
#[derive(Debug)]
pub struct PriorityCollection<T, P: Priority = usize> {
    /// Objects and their current priorities, indexed by [`Id`].
    slots: Slots<T, P>,

    /// Live identities, ordered by priority and then by identity.
    ranking: BTreeSet<(P, Id)>,
}

impl<T, P: Priority> PriorityCollection<T, P> {
    /// Construct an empty collection.
    pub fn new() -> Self {
        Self {
            slots: Slots::new(),
            ranking: BTreeSet::new(),
        }
    }

    /// Construct an empty collection with room for `capacity` objects before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slots::with_capacity(capacity),
            ranking: BTreeSet::new(),
        }
    }

    /// Add an object at the initial priority, returning its newly assigned identity.
    pub fn add(&mut self, value: T) -> Id {
        let id = self.slots.insert(value);
        self.ranking.insert((P::initial(), id));
        log::trace!("added {id}");
        id
    }

    /// Add every object of `values` in order, returning their identities in the same order.
    pub fn add_range(&mut self, values: impl IntoIterator<Item = T>) -> Vec<Id> {
        let mut ids = Vec::new();
        self.add_range_into(values, &mut ids);
        ids
    }

    /// Add every object of `values` in order, writing each identity to `ids` as it is assigned.
    pub fn add_range_into(
        &mut self,
        values: impl IntoIterator<Item = T>,
        ids: &mut impl Extend<Id>,
    ) {
        for value in values {
            ids.extend(Some(self.add(value)));
        }
    }

    /// Whether `id` refers to an object that is still in the collection.
    ///
    /// Returns false both for identities that were popped and for identities that this collection
    /// never handed out.
    pub fn is_valid(&self, id: Id) -> bool {
        self.slots.is_live(id)
    }

    /// Retrieve the object named by `id`.
    ///
    /// # Panics
    ///
    /// If `id` is not [valid](Self::is_valid).
    pub fn get(&self, id: Id) -> &T {
        self.try_get(id).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Retrieve the object named by `id`, or [`Error::InvalidId`] if it is not live.
    pub fn try_get(&self, id: Id) -> Result<&T> {
        self.slots
            .get(id)
            .map(|(value, _)| value)
            .ok_or(Error::InvalidId(id))
    }

    /// Current priority of the object named by `id`, if it is live.
    pub fn priority(&self, id: Id) -> Option<P> {
        self.slots.get(id).map(|(_, priority)| priority.clone())
    }

    /// Raise the priority of `id` by one.
    ///
    /// # Panics
    ///
    /// If `id` is not [valid](Self::is_valid), or its priority cannot be represented by `P`.
    pub fn promote(&mut self, id: Id) {
        if let Err(e) = self.try_promote(id) {
            panic!("{e}");
        }
    }

    /// Raise the priority of `id` by one, returning the new priority.
    ///
    /// On error, the collection is left unchanged.
    pub fn try_promote(&mut self, id: Id) -> Result<P> {
        let Some(priority) = self.slots.priority_mut(id) else {
            log::debug!("refusing to promote {id}: not live");
            return Err(Error::InvalidId(id));
        };
        let Some(next) = priority.incremented() else {
            log::debug!("refusing to promote {id}: priority {priority:?} is the maximum");
            return Err(Error::PriorityOverflow(id));
        };

        let prev = std::mem::replace(priority, next.clone());
        let removed = self.ranking.remove(&(prev, id));
        debug_assert!(removed, "live identity {id} missing from ranking");
        self.ranking.insert((next.clone(), id));

        log::trace!("promoted {id} to {next:?}");
        Ok(next)
    }

    /// Identity and priority of the greatest object, if any.
    fn max_key(&self) -> Result<&(P, Id)> {
        self.ranking.last().ok_or(Error::Empty)
    }

    /// Retrieve the greatest object and its priority, without removing it.
    ///
    /// # Panics
    ///
    /// If the collection is empty.
    pub fn get_max(&self) -> (&T, P) {
        self.try_get_max().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Retrieve the greatest object and its priority, or [`Error::Empty`].
    pub fn try_get_max(&self) -> Result<(&T, P)> {
        let (priority, id) = self.max_key()?;
        let value = self.try_get(*id)?;
        Ok((value, priority.clone()))
    }

    /// Remove the greatest object, returning it with the priority it held.
    ///
    /// Its identity becomes permanently invalid.
    ///
    /// # Panics
    ///
    /// If the collection is empty.
    pub fn pop_max(&mut self) -> (T, P) {
        self.try_pop_max().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Remove the greatest object, returning it with the priority it held, or [`Error::Empty`].
    pub fn try_pop_max(&mut self) -> Result<(T, P)> {
        let Some((_, id)) = self.ranking.pop_last() else {
            log::debug!("refusing to pop: collection is empty");
            return Err(Error::Empty);
        };
        let (value, priority) = self.slots.take(id).ok_or(Error::InvalidId(id))?;
        log::trace!("popped {id} at {priority:?}");
        Ok((value, priority))
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    /// Whether there are no live objects.
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }

    /// Number of identities handed out so far, including popped ones.
    ///
    /// This is also the identity the next added object will receive.
    pub fn count(&self) -> usize {
        self.slots.count()
    }
}

impl<T, P: Priority> Default for PriorityCollection<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Priority> Extend<T> for PriorityCollection<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, P: Priority> FromIterator<T> for PriorityCollection<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}
