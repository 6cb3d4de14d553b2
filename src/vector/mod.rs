//! Vector module: fixed-length dense vectors and their operators.

pub mod dense;
mod ops;

pub use dense::{Vector, cross};
