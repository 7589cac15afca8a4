//! The priority index: an ordered set of `(priority, id)` pairs.
//!
//! See documentation for [`PriorityIndex`].
use crate::internal::Id;
use crate::rank::Rank;
use std::fmt::Debug;

/// An ordered set of `(priority, id)` pairs, one per live element of a
/// [`PriorityCollection`](crate::PriorityCollection).
///
/// Pairs are ordered lexicographically: by priority, then by identifier. The maximum pair thus
/// names the element with the greatest priority, and among elements sharing that priority, the
/// one inserted last.
///
/// Implementations must support removing an arbitrary pair (not just the maximum), since
/// promoting an element moves its pair from one priority to the next.
pub trait PriorityIndex<P: Rank>: Default + Debug {
    /// Add a pair. The identifier must not currently be present under any priority.
    fn insert(&mut self, priority: P, id: Id);

    /// Remove a pair; returns whether it was present.
    fn remove(&mut self, priority: &P, id: Id) -> bool;

    /// Whether the exact pair is present.
    fn contains(&self, priority: &P, id: Id) -> bool;

    /// The greatest pair, if any.
    fn max(&self) -> Option<(&P, Id)>;

    /// Remove and return the greatest pair, if any.
    fn pop_max(&mut self) -> Option<(P, Id)>;

    /// Number of pairs.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move `id` from `from` to `to`; returns whether `(from, id)` was present.
    ///
    /// Nothing is inserted if the old pair was missing.
    fn reprioritize(&mut self, from: &P, to: P, id: Id) -> bool {
        let present = self.remove(from, id);
        if present {
            self.insert(to, id);
        }
        present
    }
}
