//! A fitted category-to-code assignment.

use std::{
    collections::{hash_map::Entry, HashMap},
    hash::Hash,
};

use tracing::{debug, instrument};

use super::{
    bit::{one_hot, Bit},
    error::OneHotError,
    CodeVector, EncodedRow,
};

/// An assignment of one-hot codes to categories in order of first appearance.
///
/// The category at index `i` of the assignment order is encoded as the binary rendering of
/// `1 << i` over [`width`](Self::width) bits, most significant bit first. The first category seen
/// therefore has its one in the last position.
#[derive(Clone, Debug)]
pub struct OneHotEncoder<C> {
    categories: Vec<C>,
    indices: HashMap<C, usize>,
}

impl<C> OneHotEncoder<C>
where
    C: Eq + Hash + Clone,
{
    /// Assign a code to every distinct category, in order of first appearance.
    #[instrument(level = "trace", skip_all)]
    pub fn fit<I>(categories: I) -> Result<Self, OneHotError>
    where
        I: IntoIterator<Item = C>,
    {
        let mut encoder = Self {
            categories: Vec::new(),
            indices: HashMap::new(),
        };
        for category in categories {
            if let Entry::Vacant(entry) = encoder.indices.entry(category) {
                encoder.categories.push(entry.key().clone());
                entry.insert(encoder.categories.len() - 1);
            }
        }
        if encoder.categories.is_empty() {
            debug!("no categories to fit");
            return Err(OneHotError::Empty);
        }
        debug!(distinct = encoder.width(), "fitted one-hot encoder");
        Ok(encoder)
    }

    /// Return the length of every code, which is the number of distinct categories.
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    /// Return the distinct categories in assignment order.
    pub fn categories(&self) -> &[C] {
        &self.categories
    }

    /// Return the assignment index of `category`.
    pub fn index_of(&self, category: &C) -> Option<usize> {
        self.indices.get(category).copied()
    }

    /// Return the code assigned to `category`.
    pub fn code<B: Bit>(&self, category: &C) -> Option<CodeVector<B>> {
        self.index_of(category).map(|index| self.code_at(index))
    }

    /// Pair every category with its code, preserving input order.
    ///
    /// Each distinct code is rendered once and cloned for repeated categories.
    pub fn transform<B, I>(&self, categories: I) -> Result<Vec<EncodedRow<C, B>>, OneHotError>
    where
        B: Bit,
        I: IntoIterator<Item = C>,
    {
        let mut codes: Vec<Option<CodeVector<B>>> = vec![None; self.width()];
        categories
            .into_iter()
            .enumerate()
            .map(|(position, category)| {
                let Some(index) = self.index_of(&category) else {
                    debug!(position, "category was not seen while fitting");
                    return Err(OneHotError::UnknownCategory { position });
                };
                let code = codes[index].get_or_insert_with(|| self.code_at(index));
                Ok((category, code.clone()))
            })
            .collect()
    }

    /// Return the category that `code` was assigned to.
    pub fn decode<B: Bit>(&self, code: &[B]) -> Result<&C, OneHotError> {
        if code.len() != self.width() {
            return Err(OneHotError::WidthMismatch {
                expected: self.width(),
                found: code.len(),
            });
        }
        let ones = code.iter().filter(|b| b.is_one()).count();
        let position = code.iter().position(|b| b.is_one());
        match position {
            Some(position) if ones == 1 && code.iter().all(|b| b.is_zero() || b.is_one()) => {
                Ok(&self.categories[self.width() - 1 - position])
            }
            _ => Err(OneHotError::NotOneHot { ones }),
        }
    }

    fn code_at<B: Bit>(&self, index: usize) -> CodeVector<B> {
        one_hot(self.width(), self.width() - 1 - index)
    }
}
