//! Internal representation and memory management of elements.

use slab::Slab;
use std::fmt;

/// Stable identifier of one insertion into a [`PriorityCollection`](crate::PriorityCollection).
///
/// Identifiers are issued densely, in insertion order, starting at zero, and are never reused.
/// They are only meaningful to the collection that issued them: a collection will happily answer
/// [`is_valid()`](crate::PriorityCollection::is_valid) for an identifier issued elsewhere, but
/// the answer only reflects its own slot with that number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(usize);

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

impl Id {
    /// Unwrap the underlying index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stored data of one element.
#[derive(Debug)]
struct Entry<T, P> {
    /// `None` once the element has been popped.
    value: Option<T>,

    /// Priority of the element. Left untouched when the element is popped.
    priority: P,
}

/// Element table and liveness vector, both indexed by [`Id`].
///
/// Entries are never removed from the slab, so its keys are handed out as `0, 1, 2, ...` and
/// coincide with positions in `live`. Popping an element only flips its liveness bit and moves
/// the value out, leaving a tombstone behind.
#[derive(Debug)]
pub(crate) struct Table<T, P> {
    entries: Slab<Entry<T, P>>,
    live: Vec<bool>,
}

impl<T, P> Table<T, P> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Slab::with_capacity(capacity),
            live: Vec::with_capacity(capacity),
        }
    }

    /// The identifier the next call to [`Table::push()`] will return.
    pub(crate) fn next_id(&self) -> Id {
        self.entries.vacant_key().into()
    }

    /// Make room for one more element, so that the following [`Table::push()`] cannot allocate.
    pub(crate) fn reserve_one(&mut self) {
        self.entries.reserve(1);
        self.live.reserve(1);
    }

    /// Append a live element.
    pub(crate) fn push(&mut self, value: T, priority: P) -> Id {
        let id = self.next_id();
        let key = self.entries.insert(Entry {
            value: Some(value),
            priority,
        });
        debug_assert_eq!(key, id.index());
        self.live.push(true);
        debug_assert_eq!(self.entries.len(), self.live.len());
        id
    }

    /// Number of elements ever pushed, live or not.
    pub(crate) fn issued(&self) -> usize {
        self.live.len()
    }

    pub(crate) fn is_live(&self, id: Id) -> bool {
        self.live.get(id.index()).copied().unwrap_or(false)
    }

    fn entry(&self, id: Id) -> Option<&Entry<T, P>> {
        if self.is_live(id) {
            self.entries.get(id.index())
        } else {
            None
        }
    }

    pub(crate) fn value(&self, id: Id) -> Option<&T> {
        self.entry(id).and_then(|e| e.value.as_ref())
    }

    pub(crate) fn priority(&self, id: Id) -> Option<&P> {
        self.entry(id).map(|e| &e.priority)
    }

    /// Overwrite the priority of a live element; returns the old one.
    pub(crate) fn set_priority(&mut self, id: Id, priority: P) -> Option<P> {
        if !self.is_live(id) {
            return None;
        }
        self.entries
            .get_mut(id.index())
            .map(|e| std::mem::replace(&mut e.priority, priority))
    }

    /// Mark an element dead and move its value out.
    pub(crate) fn kill(&mut self, id: Id) -> Option<T> {
        if !self.is_live(id) {
            return None;
        }
        self.live[id.index()] = false;
        self.entries.get_mut(id.index()).and_then(|e| e.value.take())
    }
}
