//! Priority index that groups identifiers into one bucket per priority.
use crate::index::PriorityIndex;
use crate::internal::Id;
use crate::rank::Rank;
use std::collections::{BTreeMap, BTreeSet};

/// A [`PriorityIndex`] keeping one ordered bucket of identifiers per distinct priority.
///
/// Since priorities only ever grow by one, elements tend to pile up in a handful of adjacent
/// buckets; lookups then touch a small outer map and one inner set. Empty buckets are dropped
/// eagerly, so the last bucket always holds the maximum.
///
/// All operations take `O(log n)` time.
#[derive(Debug, Clone)]
pub struct BucketIndex<P> {
    buckets: BTreeMap<P, BTreeSet<Id>>,
    len: usize,
}

impl<P> Default for BucketIndex<P> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
            len: 0,
        }
    }
}

impl<P: Rank> BucketIndex<P> {
    /// Number of distinct priorities currently held.
    pub fn buckets(&self) -> usize {
        self.buckets.len()
    }
}

impl<P: Rank> PriorityIndex<P> for BucketIndex<P> {
    fn insert(&mut self, priority: P, id: Id) {
        let fresh = self.buckets.entry(priority).or_default().insert(id);
        debug_assert!(fresh, "{id} inserted twice");
        if fresh {
            self.len += 1;
        }
    }

    fn remove(&mut self, priority: &P, id: Id) -> bool {
        let Some(bucket) = self.buckets.get_mut(priority) else {
            return false;
        };
        if !bucket.remove(&id) {
            return false;
        }
        if bucket.is_empty() {
            self.buckets.remove(priority);
        }
        self.len -= 1;
        true
    }

    fn contains(&self, priority: &P, id: Id) -> bool {
        self.buckets
            .get(priority)
            .map_or(false, |bucket| bucket.contains(&id))
    }

    fn max(&self) -> Option<(&P, Id)> {
        let (priority, bucket) = self.buckets.last_key_value()?;
        bucket.last().map(|id| (priority, *id))
    }

    fn pop_max(&mut self) -> Option<(P, Id)> {
        let mut bucket = self.buckets.last_entry()?;
        let id = bucket.get_mut().pop_last()?;
        let priority = if bucket.get().is_empty() {
            bucket.remove_entry().0
        } else {
            bucket.key().clone()
        };
        self.len -= 1;
        Some((priority, id))
    }

    fn len(&self) -> usize {
        self.len
    }
}
