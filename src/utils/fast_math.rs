//! Fast inverse square root.
//!
//! Bit-level estimate of `1/sqrt(x)` refined by one Newton step. The bit
//! reinterpretation goes through [`f32::to_bits`] and [`f32::from_bits`], which
//! are defined for every bit pattern, so the result is identical on every
//! IEEE-754 platform.

/// Magic constant of the initial estimate.
pub const FAST_INV_SQRT_MAGIC: u32 = 0x5f37_59df;

/// Approximate `1 / sqrt(x)` to within about 0.2% relative error.
///
/// `x` must be finite and strictly positive. Zero, negative, infinite and NaN
/// inputs are outside the contract and return an unspecified value (they do
/// not panic).
#[inline]
pub fn fast_inverse_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let y = f32::from_bits(FAST_INV_SQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    y * (1.5 - half * y * y)
}
