use smatrix_core::{
    ColumnVector, Determinant, Matrix, MatrixError, Minor, Real, Result, SquareMatrix,
};

pub struct SolveResult<V, const N: usize, const K: usize, M> {
    pub x: Matrix<V, N, K>, // Solution, one column per right-hand side
    pub metadata: M,        // Metadata about the solve process
}

// --- Algorithm Trait Definition ---
/// Trait representing a specific linear system solving algorithm for an
/// `N x N` coefficient matrix with elements of type `T`.
pub trait SolveAlgorithm<T, const N: usize> {
    type Metadata: std::fmt::Debug;

    /// Solves the linear system A·X = B for X.
    ///
    /// # Arguments
    ///
    /// * `a` - The coefficient matrix A.
    /// * `b` - The right-hand side, one column per system sharing A.
    ///
    /// # Returns
    ///
    /// A `Result` containing the solution X or a `MatrixError`.
    fn solve_system<const K: usize>(
        &self,
        a: &SquareMatrix<T, N>,
        b: &Matrix<T, N, K>,
    ) -> Result<SolveResult<T, N, K, Self::Metadata>>;
}

// --- Algorithm Implementations ---

/// Solves A·x = B as `inverted(A) * B`, with the inverse computed by the
/// adjugate method.
///
/// There is no pivoting and no iterative refinement, so ill-conditioned
/// systems are not solved accurately. A coefficient matrix whose
/// determinant is exactly zero is rejected with
/// [`MatrixError::SingularMatrix`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSystemSolver;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjugateMetadata<T> {
    /// det(A), known to be non-zero.
    pub determinant: T,
}

impl LinearSystemSolver {
    pub fn new() -> Self {
        Self
    }

    /// Solves A·x = B for a single column vector B.
    pub fn solve<T, const N: usize>(
        &self,
        a: &SquareMatrix<T, N>,
        b: &ColumnVector<T, N>,
    ) -> Result<ColumnVector<T, N>>
    where
        T: Real,
        SquareMatrix<T, N>: Determinant<Element = T> + Minor,
        <SquareMatrix<T, N> as Minor>::Output: Determinant<Element = T>,
    {
        self.solve_many(a, b)
    }

    /// Solves A·X = B for `K` right-hand sides at once.
    pub fn solve_many<T, const N: usize, const K: usize>(
        &self,
        a: &SquareMatrix<T, N>,
        b: &Matrix<T, N, K>,
    ) -> Result<Matrix<T, N, K>>
    where
        T: Real,
        SquareMatrix<T, N>: Determinant<Element = T> + Minor,
        <SquareMatrix<T, N> as Minor>::Output: Determinant<Element = T>,
    {
        self.solve_system(a, b).map(|result| result.x)
    }
}

impl<T, const N: usize> SolveAlgorithm<T, N> for LinearSystemSolver
where
    T: Real,
    SquareMatrix<T, N>: Determinant<Element = T> + Minor,
    <SquareMatrix<T, N> as Minor>::Output: Determinant<Element = T>,
{
    type Metadata = AdjugateMetadata<T>;

    fn solve_system<const K: usize>(
        &self,
        a: &SquareMatrix<T, N>,
        b: &Matrix<T, N, K>,
    ) -> Result<SolveResult<T, N, K, Self::Metadata>> {
        log::debug!(
            "Solving {}x{} system with {} right-hand side(s) by adjugate inversion",
            N,
            N,
            K
        );
        let determinant = a.determinant();
        if determinant == T::zero() {
            log::warn!("Coefficient matrix is singular, no unique solution");
            return Err(MatrixError::SingularMatrix);
        }
        let x = &a.inverted() * b;
        log::trace!("Solution: {:?}", x);
        Ok(SolveResult {
            x,
            metadata: AdjugateMetadata { determinant },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_diagonal() {
        let a = SquareMatrix::new([[2.0, 0.0], [0.0, 2.0]]);
        let b = ColumnVector::new([[4.0], [6.0]]);
        let x = LinearSystemSolver::new().solve(&a, &b).unwrap();
        assert_eq!(x, ColumnVector::new([[2.0], [3.0]]));
    }

    #[test]
    fn test_solve_system_reports_determinant() {
        let a = SquareMatrix::new([[4.0, 7.0], [2.0, 6.0]]);
        let b = Matrix::new([[1.0, 0.0], [0.0, 1.0]]);
        let result = SolveAlgorithm::<f64, 2>::solve_system(&LinearSystemSolver, &a, &b).unwrap();
        assert_eq!(result.metadata, AdjugateMetadata { determinant: 10.0 });
        // Solving against the identity yields the inverse.
        assert_eq!(result.x, a.inverted());
    }

    #[test]
    fn test_solve_singular() {
        let a = SquareMatrix::new([[1.0, 2.0], [2.0, 4.0]]);
        let b = ColumnVector::new([[1.0], [1.0]]);
        assert_eq!(
            LinearSystemSolver.solve(&a, &b),
            Err(MatrixError::SingularMatrix)
        );
    }
}
