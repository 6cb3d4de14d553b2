//! Numeric helpers.

pub mod fast_math;
pub use fast_math::fast_inverse_sqrt;
