//! Priority values.
use num::{CheckedAdd, One, Zero};
use std::fmt::Debug;

/// Anything that can serve as the priority of an element.
///
/// A priority starts at [`Zero::zero()`] and only ever grows by [`One::one()`]. Every primitive
/// unsigned integer qualifies, as does [`num::BigUint`] for priorities that never overflow.
pub trait Rank: Ord + Clone + Debug + Zero + One + CheckedAdd {
    /// The priority one step above `self`, or `None` if it cannot be represented.
    fn succ(&self) -> Option<Self> {
        self.checked_add(&Self::one())
    }
}

impl<P> Rank for P where P: Ord + Clone + Debug + Zero + One + CheckedAdd {}
