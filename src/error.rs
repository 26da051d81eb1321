//! Failure categories shared by every codebook.

use std::fmt;

/// The broad category of a failure, independent of which codebook raised it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A symbol, token or category is absent from the relevant table.
    Lookup,
    /// The input does not have the expected shape.
    Type,
    /// The input holds nothing to encode.
    Empty,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup => write!(f, "lookup"),
            Self::Type => write!(f, "type"),
            Self::Empty => write!(f, "empty"),
        }
    }
}
