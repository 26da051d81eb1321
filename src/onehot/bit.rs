//! Traits for types that can be used as elements of a code vector.

/// Code vector elements.
///
/// Any numeric type with a zero and a one qualifies, so code vectors can be produced directly in
/// the element type a model consumes.
pub trait Bit: 'static + Clone + PartialEq + num::Zero + num::One {}

impl<T> Bit for T where T: 'static + Clone + PartialEq + num::Zero + num::One {}

/// Return a vector of `width` zeros with a one at `position`.
pub(crate) fn one_hot<B: Bit>(width: usize, position: usize) -> Vec<B> {
    debug_assert!(position < width, "bit {position} outside width {width}");
    let mut code = vec![B::zero(); width];
    code[position] = B::one();
    code
}
