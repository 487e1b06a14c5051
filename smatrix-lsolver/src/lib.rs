//! `smatrix-lsolver`: A linear equation solver for fixed-size matrices.
//!
//! This library solves systems of linear equations of the form A·x = b where
//! the shape of A and b is known at compile time.

// Core modules
pub mod algorithms;

pub use algorithms::{AdjugateMetadata, LinearSystemSolver, SolveAlgorithm, SolveResult};

// Re-export from smatrix_core
pub use smatrix_core::{
    ColumnVector, Determinant, Matrix, MatrixError, Minor, Real, Scalar, SignedScalar,
    SquareMatrix,
};

#[cfg(feature = "complex")]
pub use smatrix_core::{Complex, ComplexMatrix};
