//! Reference priority index that finds the maximum by scanning.
use crate::index::PriorityIndex;
use crate::internal::Id;
use crate::rank::Rank;

/// An unordered [`PriorityIndex`]: pairs are kept in a plain vector.
///
/// Insertion is constant time, but removal and maximum selection scan every live pair. It is
/// meant as an obviously-correct baseline to check the other indices against, not for real use.
#[derive(Debug, Clone)]
pub struct ScanIndex<P> {
    entries: Vec<(P, Id)>,
}

impl<P> Default for ScanIndex<P> {
    fn default() -> Self {
        Self { entries: vec![] }
    }
}

impl<P: Rank> ScanIndex<P> {
    fn position(&self, priority: &P, id: Id) -> Option<usize> {
        self.entries
            .iter()
            .position(|(p, i)| p == priority && *i == id)
    }

    fn position_max(&self) -> Option<usize> {
        // Pairs are distinct, so the lexicographic maximum is unique.
        self.entries
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(pos, _)| pos)
    }
}

impl<P: Rank> PriorityIndex<P> for ScanIndex<P> {
    fn insert(&mut self, priority: P, id: Id) {
        debug_assert!(self.entries.iter().all(|(_, i)| *i != id), "{id} inserted twice");
        self.entries.push((priority, id));
    }

    fn remove(&mut self, priority: &P, id: Id) -> bool {
        match self.position(priority, id) {
            Some(pos) => {
                self.entries.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    fn contains(&self, priority: &P, id: Id) -> bool {
        self.position(priority, id).is_some()
    }

    fn max(&self) -> Option<(&P, Id)> {
        let pos = self.position_max()?;
        let (p, id) = &self.entries[pos];
        Some((p, *id))
    }

    fn pop_max(&mut self) -> Option<(P, Id)> {
        let pos = self.position_max()?;
        Some(self.entries.swap_remove(pos))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
