//! Operator sugar for [`Vector`]; every impl forwards to an [`Elementwise`] method.
//!
//! Division yields `Result<Vector, LinalgError>`, so there is no `DivAssign`;
//! use `div_assign_elem` / `div_assign_scalar` instead.

use super::dense::Vector;
use crate::core::traits::{Elementwise, Scalar};
use crate::error::LinalgError;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.add_elem(&rhs)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.sub_elem(&rhs)
    }
}

impl<T: Scalar, const N: usize> Mul for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_elem(&rhs)
    }
}

impl<T: Scalar, const N: usize> Div for Vector<T, N> {
    type Output = Result<Self, LinalgError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.div_elem(&rhs)
    }
}

impl<T: Scalar, const N: usize> Add<T> for Vector<T, N> {
    type Output = Self;

    fn add(self, s: T) -> Self {
        self.add_scalar(s)
    }
}

impl<T: Scalar, const N: usize> Sub<T> for Vector<T, N> {
    type Output = Self;

    fn sub(self, s: T) -> Self {
        self.sub_scalar(s)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        self.mul_scalar(s)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Result<Self, LinalgError>;

    fn div(self, s: T) -> Self::Output {
        self.div_scalar(s)
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.neg_elems()
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign_elem(&rhs);
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign_elem(&rhs);
    }
}

impl<T: Scalar, const N: usize> MulAssign for Vector<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        self.mul_assign_elem(&rhs);
    }
}

impl<T: Scalar, const N: usize> AddAssign<T> for Vector<T, N> {
    fn add_assign(&mut self, s: T) {
        self.add_assign_scalar(s);
    }
}

impl<T: Scalar, const N: usize> SubAssign<T> for Vector<T, N> {
    fn sub_assign(&mut self, s: T) {
        self.sub_assign_scalar(s);
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, s: T) {
        self.mul_assign_scalar(s);
    }
}

// Scalar on the left: `s + v`, `s - v`, `s * v`, `s / v`.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl<const N: usize> Add<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn add(self, v: Vector<$t, N>) -> Vector<$t, N> {
                v.add_scalar(self)
            }
        }

        impl<const N: usize> Sub<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn sub(self, v: Vector<$t, N>) -> Vector<$t, N> {
                v.rsub_scalar(self)
            }
        }

        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                v.mul_scalar(self)
            }
        }

        impl<const N: usize> Div<Vector<$t, N>> for $t {
            type Output = Result<Vector<$t, N>, LinalgError>;

            fn div(self, v: Vector<$t, N>) -> Self::Output {
                v.rdiv_scalar(self)
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_and_scalar_arithmetic() {
        let v = Vector::new([1.0_f32, 2.0, 3.0]);
        let w = Vector::new([4.0_f32, 5.0, 6.0]);
        assert_eq!(v + w, Vector::new([5.0, 7.0, 9.0]));
        assert_eq!(v - w, Vector::new([-3.0, -3.0, -3.0]));
        assert_eq!(v * w, Vector::new([4.0, 10.0, 18.0]));
        assert_eq!(v + 1.0, Vector::new([2.0, 3.0, 4.0]));
        assert_eq!(v - 1.0, Vector::new([0.0, 1.0, 2.0]));
        assert_eq!(v * 2.0, Vector::new([2.0, 4.0, 6.0]));
        assert_eq!(-v, Vector::new([-1.0, -2.0, -3.0]));
    }

    #[test]
    fn reflected_scalar_operators() {
        let v = Vector::new([1.0_f32, 2.0, 3.0]);
        assert_eq!(1.0 + v, Vector::new([2.0, 3.0, 4.0]));
        assert_eq!(1.0 - v, Vector::new([0.0, -1.0, -2.0]));
        assert_eq!(2.0 * v, Vector::new([2.0, 4.0, 6.0]));
        assert_eq!((6.0 / v).unwrap(), Vector::new([6.0, 3.0, 2.0]));

        let with_zero = Vector::new([2_i32, 0, 1]);
        assert!(matches!(
            6 / with_zero,
            Err(LinalgError::DivisionByZero { index: 1 })
        ));
    }

    #[test]
    fn division_checks_every_divisor() {
        let v = Vector::new([1.0_f32, 2.0, 3.0]);
        let w = Vector::new([4.0_f32, 6.0, 9.0]);
        assert_eq!(((w * v) / v).unwrap(), w);
        assert_eq!(((v * 2.0) / 2.0).unwrap(), v);

        assert!(matches!(v / 0.0, Err(LinalgError::DivisionByZero { index: 0 })));
        let zero_last = Vector::new([1.0_f32, 1.0, 0.0]);
        assert!(matches!(v / zero_last, Err(LinalgError::DivisionByZero { index: 2 })));
    }

    #[test]
    fn compound_assignment_chains() {
        let mut v = Vector::new([1, 2, 3]);
        v += Vector::new([1, 1, 1]);
        v *= 2;
        assert_eq!(v, Vector::new([4, 6, 8]));

        v.sub_assign_scalar(1).mul_assign_elem(&Vector::new([1, 0, 1]));
        assert_eq!(v, Vector::new([3, 0, 7]));

        let before = v;
        assert!(v.div_assign_elem(&Vector::new([1, 0, 1])).is_err());
        assert_eq!(v, before, "failed division must leave the receiver untouched");
        v.div_assign_scalar(1).unwrap().add_assign_scalar(1);
        assert_eq!(v, Vector::new([4, 1, 8]));
    }
}
