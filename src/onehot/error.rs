//! Defines one-hot encoding errors.

use thiserror::Error;

use crate::error::ErrorKind;

/// An error type for all one-hot encoding operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OneHotError {
    /// No categories were supplied.
    #[error("expected at least 1 category, got 0")]
    Empty,
    /// The input was not a sequence of categories.
    #[error("expected a sequence of categories, found {found}")]
    NotSequence {
        /// The kind of value that was supplied instead.
        found: &'static str,
    },
    /// A category was not seen while fitting the encoder.
    #[error("category at position {position} was not seen while fitting")]
    UnknownCategory {
        /// Index of the category within the transformed input.
        position: usize,
    },
    /// A code vector does not have the width of the encoder.
    #[error("expected a code of width {expected}, found width {found}")]
    WidthMismatch {
        /// The width of the fitted encoder.
        expected: usize,
        /// The width of the supplied code.
        found: usize,
    },
    /// A code vector is not one-hot.
    #[error("code is not one-hot ({ones} set bits)")]
    NotOneHot {
        /// Number of elements equal to one.
        ones: usize,
    },
}

impl OneHotError {
    /// Return the broad category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty => ErrorKind::Empty,
            Self::NotSequence { .. } | Self::WidthMismatch { .. } => ErrorKind::Type,
            Self::UnknownCategory { .. } | Self::NotOneHot { .. } => ErrorKind::Lookup,
        }
    }
}
