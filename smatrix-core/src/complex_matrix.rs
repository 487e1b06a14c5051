use crate::matrix::Matrix;
use crate::traits::Scalar;
use num_complex::Complex;
use std::ops::Neg;

/// A matrix of complex numbers built on the real element type `T`.
pub type ComplexMatrix<T, const M: usize, const N: usize> = Matrix<Complex<T>, M, N>;

impl<T, const M: usize, const N: usize> Matrix<Complex<T>, M, N>
where
    T: Scalar + Neg<Output = T>,
{
    /// Builds a complex matrix from its real and imaginary parts.
    pub fn from_parts(re: &Matrix<T, M, N>, im: &Matrix<T, M, N>) -> Self {
        Self::from_fn(|m, n| Complex::new(re[(m, n)], im[(m, n)]))
    }

    pub fn re(&self) -> Matrix<T, M, N> {
        self.map(|z| z.re)
    }

    pub fn im(&self) -> Matrix<T, M, N> {
        self.map(|z| z.im)
    }

    /// Replaces every element with its complex conjugate.
    pub fn conjugate(&mut self) {
        for z in self.as_mut_slice() {
            *z = z.conj();
        }
    }

    pub fn conjugated(&self) -> Self {
        let mut result = *self;
        result.conjugate();
        result
    }

    /// Hermitian transpose: transpose, then conjugate every element.
    pub fn conjugated_transposed(&self) -> Matrix<Complex<T>, N, M> {
        let mut result = self.transposed();
        result.conjugate();
        result
    }
}

impl<T, const N: usize> Matrix<Complex<T>, N, N>
where
    T: Scalar + Neg<Output = T>,
{
    /// In-place Hermitian transpose.
    pub fn conjugate_transpose(&mut self) {
        self.transpose();
        self.conjugate();
    }

    /// Whether the matrix equals its own conjugate transpose.
    pub fn is_hermitian(&self) -> bool {
        self.conjugated_transposed() == *self
    }
}
