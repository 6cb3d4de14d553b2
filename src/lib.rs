//! moldyn: fixed-size dense vectors and matrices for particle-style numerics
//!
//! This crate provides stack-allocated `Vector<T, N>` values, row-major
//! `Matrix<T, R, C>` values whose row and column views alias the parent
//! buffer, a fast approximate inverse square root, and a reader for
//! whitespace-separated streams of 3-D points. Matrices convert to and from
//! `faer::Mat` for anything beyond elementwise work and products.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod matrix;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use crate::core::traits::{Elementwise, MatVec, Scalar};
pub use config::{NormalizeOptions, ReadOptions};
pub use error::LinalgError;
pub use io::{read_points, read_points_with, read_row};
pub use matrix::{ColVec, Matrix, RowVec};
pub use utils::fast_inverse_sqrt;
pub use vector::{Vector, cross};
