//! Errors reported by the checked operations of a collection.
use crate::internal::Id;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The identifier was never issued by this collection, or its element was already popped.
    InvalidId(Id),

    /// The element's priority is already the largest value its type can represent.
    Overflow(Id),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidId(id) => write!(f, "identifier {id} does not name a live element"),
            Error::Overflow(id) => write!(f, "priority of element {id} cannot be incremented"),
        }
    }
}

impl std::error::Error for Error {}
