//! One-hot encoding of categories in order of first appearance.
//!
//! Every distinct category gets a code vector whose length is the number of distinct categories
//! and which holds exactly one `1`. Codes are assigned lazily while scanning the input, so the
//! first category seen owns the least significant bit:
//!
//! ```
//! use codebook::onehot;
//!
//! let rows = onehot::fit_transform_str("abcbcc").unwrap();
//! assert_eq!(rows[0], ('a', vec![0, 0, 1]));
//! assert_eq!(rows[2], ('c', vec![1, 0, 0]));
//! assert_eq!(rows.len(), 6);
//! ```
//!
//! Assignment follows iteration order. Unordered containers such as `HashSet` yield codes in
//! whatever order they iterate, which is not reproducible across runs.

use std::hash::Hash;

pub mod bit;
mod encoder;
pub mod error;

pub use bit::Bit;
pub use encoder::OneHotEncoder;
pub use error::OneHotError;

/// A one-hot code vector.
pub type CodeVector<B = u8> = Vec<B>;

/// A category paired with its code vector.
pub type EncodedRow<C, B = u8> = (C, CodeVector<B>);

/// Encode every element of `categories`, preserving input order.
///
/// A sequence holding a single string yields a single category; use [`fit_transform_str`] to
/// encode the characters of a string.
pub fn fit_transform<C, I>(categories: I) -> Result<Vec<EncodedRow<C>>, OneHotError>
where
    C: Eq + Hash + Clone,
    I: IntoIterator<Item = C>,
{
    fit_transform_as(categories)
}

/// Encode every element of `categories` into code vectors of element type `B`.
pub fn fit_transform_as<B, C, I>(categories: I) -> Result<Vec<EncodedRow<C, B>>, OneHotError>
where
    B: Bit,
    C: Eq + Hash + Clone,
    I: IntoIterator<Item = C>,
{
    let categories: Vec<C> = categories.into_iter().collect();
    let encoder = OneHotEncoder::fit(categories.iter().cloned())?;
    encoder.transform(categories)
}

/// Encode the characters of `categories`, preserving input order.
pub fn fit_transform_str(categories: &str) -> Result<Vec<EncodedRow<char>>, OneHotError> {
    fit_transform(categories.chars())
}
