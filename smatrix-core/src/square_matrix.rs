//! Square-matrix algebra: determinant, minors, trace and adjugate inversion.
//!
//! Stable Rust cannot name `N - 1` in a const generic position, so the minor
//! relationship and the cofactor expansion are implemented per concrete
//! dimension up to [`MAX_DIMENSION`].

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::traits::{Determinant, Minor, Real, Scalar, SignedScalar};

/// A matrix with as many rows as columns.
pub type SquareMatrix<T, const N: usize> = Matrix<T, N, N>;

/// Largest dimension with [`Determinant`] and [`Minor`] implementations.
pub const MAX_DIMENSION: usize = 10;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Ones on the main diagonal, zeros elsewhere.
    pub fn identity() -> Self {
        Self::from_fn(|m, n| if m == n { T::one() } else { T::zero() })
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, n| acc + self[(n, n)])
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        let data = self.data_mut();
        for m in 0..N {
            for n in (m + 1)..N {
                let upper = data[m][n];
                data[m][n] = data[n][m];
                data[n][m] = upper;
            }
        }
    }

    /// Copies every element except row `m` and column `n` into a `K x K`
    /// matrix, where `K + 1 == N`.
    fn minor_into<const K: usize>(&self, m: usize, n: usize) -> Matrix<T, K, K> {
        debug_assert_eq!(K + 1, N);
        let data = self.data();
        Matrix::from_fn(|i, j| data[i + usize::from(i >= m)][j + usize::from(j >= n)])
    }

    /// Laplace expansion along the first row, for `N >= 3`.
    fn cofactor_expansion(&self) -> T
    where
        Self: Minor,
        <Self as Minor>::Output: Determinant<Element = T>,
    {
        let mut result = T::zero();
        for (n, &element) in self.data()[0].iter().enumerate() {
            let term = element * self.minor(0, n).determinant();
            result = if n % 2 == 0 { result + term } else { result - term };
        }
        result
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N>
where
    Self: Determinant<Element = T>,
{
    pub fn is_invertible(&self) -> bool {
        self.determinant() != T::zero()
    }
}

impl<T: Real, const N: usize> Matrix<T, N, N>
where
    Self: Determinant<Element = T> + Minor,
    <Self as Minor>::Output: Determinant<Element = T>,
{
    /// Replaces the matrix with its inverse. See [`Matrix::inverted`].
    pub fn inverte(&mut self) {
        *self = self.inverted();
    }

    /// Returns the inverse computed by the adjugate method.
    ///
    /// `1 / det` and every cofactor product are evaluated in `f64` and then
    /// converted to `T` with `as` semantics, so integer matrices truncate.
    /// No singularity check is made: a singular float matrix yields
    /// infinities or NaNs and a singular integer matrix saturates. Use
    /// [`Matrix::try_inverted`] for a checked variant.
    pub fn inverted(&self) -> Self {
        let determinant = self.determinant();
        if determinant == T::zero() {
            log::warn!("Inverting a singular {}x{} matrix, result is not finite", N, N);
        }
        let determinant: f64 = determinant.as_();
        let factor = 1.0 / determinant;
        let transposed = self.transposed();
        Self::from_fn(|m, n| {
            let sign = if (m + n) % 2 == 0 { 1.0 } else { -1.0 };
            let cofactor: f64 = transposed.minor(m, n).determinant().as_();
            T::from_f64(sign * factor * cofactor)
        })
    }

    /// Like [`Matrix::inverted`] but fails with [`MatrixError::SingularMatrix`]
    /// when the determinant is exactly zero.
    pub fn try_inverted(&self) -> Result<Self> {
        if !self.is_invertible() {
            return Err(MatrixError::SingularMatrix);
        }
        Ok(self.inverted())
    }
}

impl<T: SignedScalar> Determinant for Matrix<T, 0, 0> {
    type Element = T;

    /// The empty product.
    fn determinant(&self) -> T {
        T::one()
    }
}

impl<T: SignedScalar> Determinant for Matrix<T, 1, 1> {
    type Element = T;

    fn determinant(&self) -> T {
        self[(0, 0)]
    }
}

impl<T: SignedScalar> Determinant for Matrix<T, 2, 2> {
    type Element = T;

    fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }
}

macro_rules! impl_minor {
    ($($n:literal => $k:literal),* $(,)?) => {$(
        impl<T: Scalar> Minor for Matrix<T, $n, $n> {
            type Output = Matrix<T, $k, $k>;

            #[inline]
            fn minor(&self, m: usize, n: usize) -> Self::Output {
                self.minor_into::<$k>(m, n)
            }
        }
    )*};
}

macro_rules! impl_cofactor_determinant {
    ($($n:literal),* $(,)?) => {$(
        impl<T: SignedScalar> Determinant for Matrix<T, $n, $n> {
            type Element = T;

            #[inline]
            fn determinant(&self) -> T {
                self.cofactor_expansion()
            }
        }
    )*};
}

impl_minor!(
    1 => 0,
    2 => 1,
    3 => 2,
    4 => 3,
    5 => 4,
    6 => 5,
    7 => 6,
    8 => 7,
    9 => 8,
    10 => 9,
);

impl_cofactor_determinant!(3, 4, 5, 6, 7, 8, 9, 10);
