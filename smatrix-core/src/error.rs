use thiserror::Error;

/// Which dimension of a matrix an index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Initialize data is smaller than necessary: expected at least {expected} elements, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("Index out of range: {axis} {index} is not below {bound}")]
    IndexOutOfRange {
        index: usize,
        bound: usize,
        axis: Axis,
    },

    #[error("det(A) == 0, A is irreversible")]
    SingularMatrix,
}

pub type Result<T> = core::result::Result<T, MatrixError>;
