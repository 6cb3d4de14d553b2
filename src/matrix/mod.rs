//! Matrix module: fixed-shape dense matrices, aliasing views and operators.

pub mod dense;
mod ops;
mod storage;

pub use dense::{ColVec, Matrix, RowVec};
