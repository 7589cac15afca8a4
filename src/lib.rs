//! A priority collection with stable identifiers.
//!
//! See documentation for [`PriorityCollection`].
mod bucket;
mod error;
mod index;
mod internal;
pub mod naive;
mod ordered;
mod rank;

pub use bucket::BucketIndex;
pub use error::Error;
pub use index::PriorityIndex;
pub use internal::Id;
pub use ordered::OrderedIndex;
pub use rank::Rank;

use internal::Table;
use log::trace;
use std::ops::Index;

/// A collection of elements, each carrying a priority that can only go up.
///
/// Every element gets an [`Id`] when it is added, starting at priority zero. Callers can read an
/// element back through its identifier, [`promote()`](Self::promote) it one priority step at a
/// time, and look at or remove whichever element currently has the greatest priority. When
/// several elements share the greatest priority, the one added last wins.
///
/// ## Usage
///
/// ```rust
/// # use priority_collection::*;
/// let mut colors: PriorityCollection<String> = PriorityCollection::new();
/// let white = colors.add("white".to_string());
/// let yellow = colors.add("yellow".to_string());
/// let red = colors.add("red".to_string());
///
/// colors.promote(yellow);
/// colors.promote(red);
/// colors.promote(red);
/// colors.promote(yellow);
///
/// assert_eq!(colors.pop_max(), Some(("red".to_string(), 2)));
/// assert_eq!(colors.pop_max(), Some(("yellow".to_string(), 2)));
/// assert_eq!(colors.pop_max(), Some(("white".to_string(), 0)));
/// assert!(!colors.is_valid(white));
/// ```
///
/// ## Identifiers
///
/// Identifiers are dense indices, issued as `0, 1, 2, ...` and never recycled. Popping an element
/// leaves a tombstone in its slot: the identifier stays dead forever and its storage is only
/// released when the collection is dropped. Memory use is thus proportional to the number of
/// elements ever added, not to the number currently alive.
///
/// Identifiers are only meaningful to the collection that issued them. Querying
/// [`is_valid()`](Self::is_valid) with an identifier from another collection never panics, but
/// merely reports whether this collection's slot with the same number is alive.
///
/// ## Elements are never copied
///
/// `T` needs no `Clone`: [`add()`](Self::add) takes elements by value, [`get()`](Self::get) and
/// [`get_max()`](Self::get_max) lend them out, and [`pop_max()`](Self::pop_max) moves them back
/// to the caller.
///
/// ## Priorities and indices
///
/// The priority type `P` is any [`Rank`], `u64` by default. Fixed-width priorities can overflow
/// under enough promotions, which [`try_promote()`](Self::try_promote) reports as
/// [`Error::Overflow`]; use [`num::BigUint`] for priorities that grow without bound.
///
/// The element with the greatest priority is tracked by a [`PriorityIndex`] `I`, by default an
/// [`OrderedIndex`]. [`BucketIndex`] is an alternative that groups elements by priority.
#[derive(Debug)]
pub struct PriorityCollection<T, P = u64, I = OrderedIndex<P>> {
    /// Element table and liveness vector.
    table: Table<T, P>,

    /// One `(priority, id)` pair per live element.
    index: I,
}

impl<T, P: Rank, I: PriorityIndex<P>> PriorityCollection<T, P, I> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            table: Table::new(),
            index: I::default(),
        }
    }

    /// Create an empty collection with room for `capacity` elements before the element table
    /// needs to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Table::with_capacity(capacity),
            index: I::default(),
        }
    }

    /// Add an element with priority zero, returning its freshly issued identifier.
    ///
    /// Takes `O(log n)` time.
    pub fn add(&mut self, value: T) -> Id {
        // Reserve first: once the index has the new pair, pushing to the table cannot fail, so
        // the element lands either in all three structures or in none.
        self.table.reserve_one();
        let id = self.table.next_id();
        self.index.insert(P::zero(), id);
        self.table.push(value, P::zero());
        trace!("add {id}");
        id
    }

    /// Add every element of `values` in order, feeding each issued identifier to `ids` as soon as
    /// it is issued.
    ///
    /// Equivalent to calling [`add()`](Self::add) on each element in turn.
    ///
    /// ```rust
    /// # use priority_collection::*;
    /// let mut words: PriorityCollection<&str> = PriorityCollection::new();
    /// let mut ids = Vec::new();
    /// words.add_range(["red", "blue", "green"], &mut ids);
    /// assert_eq!(ids, [Id::from(0), Id::from(1), Id::from(2)]);
    /// ```
    pub fn add_range<It, S>(&mut self, values: It, ids: &mut S)
    where
        It: IntoIterator<Item = T>,
        S: Extend<Id>,
    {
        for value in values {
            let id = self.add(value);
            ids.extend(std::iter::once(id));
        }
    }

    /// Add every element of `values` in order, returning their identifiers.
    pub fn add_all(&mut self, values: impl IntoIterator<Item = T>) -> Vec<Id> {
        let mut ids = Vec::new();
        self.add_range(values, &mut ids);
        ids
    }

    /// Whether `id` names a live element of this collection.
    ///
    /// Never panics, whatever the identifier.
    pub fn is_valid(&self, id: Id) -> bool {
        self.table.is_live(id)
    }

    /// The element named by `id`, if it is live.
    pub fn get(&self, id: Id) -> Option<&T> {
        self.table.value(id)
    }

    /// The current priority of the element named by `id`, if it is live.
    pub fn priority(&self, id: Id) -> Option<&P> {
        self.table.priority(id)
    }

    /// Increase the priority of the element named by `id` by one.
    ///
    /// Takes `O(log n)` time. On error, the collection is left unchanged.
    pub fn try_promote(&mut self, id: Id) -> Result<(), Error> {
        let prev = self.table.priority(id).ok_or(Error::InvalidId(id))?;
        let next = prev.succ().ok_or(Error::Overflow(id))?;
        let prev = prev.clone();

        let moved = self.index.reprioritize(&prev, next.clone(), id);
        debug_assert!(moved, "{id} is live but missing from the index");
        self.table.set_priority(id, next);
        trace!("promote {id} from {prev:?}");
        Ok(())
    }

    /// Increase the priority of the element named by `id` by one.
    ///
    /// Panics if `id` does not name a live element, or if the priority would overflow. See
    /// [`try_promote()`](Self::try_promote) for a non-panicking alternative.
    pub fn promote(&mut self, id: Id) {
        if let Err(e) = self.try_promote(id) {
            panic!("{e}");
        }
    }

    /// The element with the greatest priority, along with that priority.
    ///
    /// Among elements sharing the greatest priority, returns the one with the largest identifier.
    /// Returns `None` if no element is live.
    pub fn get_max(&self) -> Option<(&T, &P)> {
        let (priority, id) = self.index.max()?;
        self.table.value(id).map(|value| (value, priority))
    }

    /// Remove the element with the greatest priority, returning it along with its priority.
    ///
    /// Picks the same element as [`get_max()`](Self::get_max). Its identifier is dead from then
    /// on. Returns `None` if no element is live.
    pub fn pop_max(&mut self) -> Option<(T, P)> {
        let (priority, id) = self.index.pop_max()?;
        let value = self.table.kill(id);
        debug_assert!(value.is_some(), "{id} is in the index but not live");
        trace!("pop {id} at {priority:?}");
        value.map(|value| (value, priority))
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of identifiers issued so far, i.e., number of elements ever added.
    pub fn issued(&self) -> usize {
        self.table.issued()
    }

    /// Read-only view of the priority index.
    pub fn priority_index(&self) -> &I {
        &self.index
    }
}

impl<T, P: Rank, I: PriorityIndex<P>> Default for PriorityCollection<T, P, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Rank, I: PriorityIndex<P>> Index<Id> for PriorityCollection<T, P, I> {
    type Output = T;

    /// Panics if `id` does not name a live element.
    fn index(&self, id: Id) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("{}", Error::InvalidId(id)),
        }
    }
}

impl<T, P: Rank, I: PriorityIndex<P>> Extend<T> for PriorityCollection<T, P, I> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, values: It) {
        for value in values {
            self.add(value);
        }
    }
}
