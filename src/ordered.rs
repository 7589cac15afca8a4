//! Priority index backed by a single ordered set.
use crate::index::PriorityIndex;
use crate::internal::Id;
use crate::rank::Rank;
use std::collections::BTreeSet;

/// A [`PriorityIndex`] storing every `(priority, id)` pair in one [`BTreeSet`].
///
/// All operations take `O(log n)` time in the number of live elements. Since the set orders its
/// tuples lexicographically, the last pair is the maximum with ties going to the larger
/// identifier, with no further bookkeeping.
///
/// ```rust
/// # use priority_collection::{Id, OrderedIndex, PriorityIndex};
/// let mut index = OrderedIndex::default();
/// index.insert(1u32, Id::from(0));
/// index.insert(1u32, Id::from(1));
/// index.insert(0u32, Id::from(2));
/// assert_eq!(index.max(), Some((&1, Id::from(1))));
/// ```
#[derive(Debug, Clone)]
pub struct OrderedIndex<P> {
    entries: BTreeSet<(P, Id)>,
}

impl<P> Default for OrderedIndex<P> {
    fn default() -> Self {
        Self {
            entries: BTreeSet::new(),
        }
    }
}

impl<P: Rank> PriorityIndex<P> for OrderedIndex<P> {
    fn insert(&mut self, priority: P, id: Id) {
        let fresh = self.entries.insert((priority, id));
        debug_assert!(fresh, "{id} inserted twice");
    }

    fn remove(&mut self, priority: &P, id: Id) -> bool {
        self.entries.remove(&(priority.clone(), id))
    }

    fn contains(&self, priority: &P, id: Id) -> bool {
        self.entries.contains(&(priority.clone(), id))
    }

    fn max(&self) -> Option<(&P, Id)> {
        self.entries.last().map(|(p, id)| (p, *id))
    }

    fn pop_max(&mut self) -> Option<(P, Id)> {
        self.entries.pop_last()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
