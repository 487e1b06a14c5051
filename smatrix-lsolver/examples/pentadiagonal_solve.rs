use smatrix_lsolver::{ColumnVector, LinearSystemSolver, SolveAlgorithm, SquareMatrix};
use std::time::Instant;

const N: usize = 8;

/// Creates a pentadiagonal matrix A of size N x N.
/// Diagonals:
/// - Main: 4.0
/// - Adjacent (+1, -1): -1.0
/// - Outer (+2, -2): -0.5
fn create_pentadiagonal_matrix() -> SquareMatrix<f64, N> {
    SquareMatrix::from_fn(|row, col| match row.abs_diff(col) {
        0 => 4.0,
        1 => -1.0,
        2 => -0.5,
        _ => 0.0,
    })
}

/// Creates a vector b of size N with b[i] = sin(i / N).
fn create_sin_vector() -> ColumnVector<f64, N> {
    ColumnVector::from_fn(|i, _| (i as f64 / N as f64).sin())
}

fn main() {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Setting up {}x{} pentadiagonal matrix A and sin vector b...",
        N,
        N
    );
    let a = create_pentadiagonal_matrix();
    let b = create_sin_vector();
    log::debug!("A = {}", a);

    log::info!("Starting solve...");
    let start_time = Instant::now();
    let x_result = LinearSystemSolver.solve_system(&a, &b);
    let duration = start_time.elapsed();

    match x_result {
        Ok(result) => {
            let residual = a * result.x - b;
            let residual_norm = residual
                .as_slice()
                .iter()
                .map(|r| r * r)
                .sum::<f64>()
                .sqrt();
            log::info!("Solver finished successfully!");
            log::info!("  det(A): {:.6e}", result.metadata.determinant);
            log::info!("  Residual norm: {:.6e}", residual_norm);
            log::info!("  Time elapsed: {:?}", duration);
            println!("{}", result.x);
        }
        Err(e) => {
            log::error!("Solver failed: {}", e);
        }
    }
}
