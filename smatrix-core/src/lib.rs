//! # Static Matrix Core Library
//!
//! Fixed-shape dense matrices whose row and column counts are const generic
//! parameters, with square-matrix algebra (determinant, minors, trace,
//! adjugate inversion) and complex conjugation helpers.

// Declare modules
pub mod error;
pub mod matrix;
pub mod square_matrix;
pub mod traits;

#[cfg(feature = "complex")]
pub mod complex_matrix;

// Re-export public types
pub use error::{Axis, MatrixError, Result};
pub use matrix::Matrix;
pub use square_matrix::{SquareMatrix, MAX_DIMENSION};
pub use traits::{Determinant, Minor, Real, Scalar, SignedScalar};

#[cfg(feature = "complex")]
pub use complex_matrix::ComplexMatrix;
#[cfg(feature = "complex")]
pub use num_complex::Complex;

/// A single-column matrix.
pub type ColumnVector<T, const N: usize> = Matrix<T, N, 1>;
