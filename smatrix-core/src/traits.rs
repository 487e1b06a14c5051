use num_traits::{AsPrimitive, Num};
use std::fmt::Debug;
use std::ops::Neg;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds, which covers
/// every primitive integer, `f32`, `f64` and `Complex<T>` over those.
pub trait Scalar: Copy + PartialEq + Debug + Num {}

impl<T: Copy + PartialEq + Debug + Num> Scalar for T {}

/// Real element types that round-trip through `f64`.
///
/// Inversion always scales by `1 / det` in `f64` and converts back with `as`
/// semantics, so integer elements truncate toward zero and saturate.
pub trait Real: Scalar + AsPrimitive<f64> {
    fn from_f64(value: f64) -> Self;
}

impl<T> Real for T
where
    T: Scalar + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn from_f64(value: f64) -> Self {
        value.as_()
    }
}

/// Element types closed under negation.
///
/// Cofactor expansion alternates signs and subtracts intermediate products,
/// so determinants are only offered over signed integers, floats and
/// `Complex<T>` over those. Unsigned elements are rejected at compile time:
///
/// ```compile_fail
/// use smatrix_core::{Determinant, Matrix};
///
/// let det = Matrix::new([[1u32, 1, 0], [0, 1, 1], [1, 0, 1]]).determinant();
/// ```
pub trait SignedScalar: Scalar + Neg<Output = Self> {}

impl<T: Scalar + Neg<Output = T>> SignedScalar for T {}

/// Square matrices whose determinant can be expanded by cofactors.
pub trait Determinant {
    type Element;

    /// Laplace expansion along the first row. Runs in factorial time.
    fn determinant(&self) -> Self::Element;
}

/// Square matrices that can drop one row and one column.
///
/// `Output` is always the square matrix one dimension smaller.
pub trait Minor {
    type Output;

    /// Returns the matrix without row `m` and column `n`.
    ///
    /// `m` and `n` must both be below the dimension of `self`.
    fn minor(&self, m: usize, n: usize) -> Self::Output;
}
