//! Operator sugar for [`Matrix`], by value and by reference.
//!
//! Every impl forwards to an [`Elementwise`] method. `*` between two matrices
//! is the elementwise (Hadamard) product; the matrix product is
//! [`Matrix::mm`]. Division yields `Result<Matrix, LinalgError>`.
//!
//! Compound assignment writes into the receiver's storage in place, so
//! `m.row(0) += &other` updates row 0 of `m`.

use super::dense::Matrix;
use crate::core::traits::{Elementwise, Scalar};
use crate::error::LinalgError;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binary {
    ($Op:ident, $op:ident, $method:ident) => {
        impl<T: Scalar, const R: usize, const C: usize> $Op for Matrix<T, R, C> {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self {
                self.$method(&rhs)
            }
        }

        impl<'a, T: Scalar, const R: usize, const C: usize> $Op<&'a Matrix<T, R, C>> for &'a Matrix<T, R, C> {
            type Output = Matrix<T, R, C>;

            fn $op(self, rhs: Self) -> Matrix<T, R, C> {
                self.$method(rhs)
            }
        }
    };
}

macro_rules! impl_scalar_rhs {
    ($Op:ident, $op:ident, $method:ident) => {
        impl<T: Scalar, const R: usize, const C: usize> $Op<T> for Matrix<T, R, C> {
            type Output = Self;

            fn $op(self, s: T) -> Self {
                self.$method(s)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<T> for &Matrix<T, R, C> {
            type Output = Matrix<T, R, C>;

            fn $op(self, s: T) -> Matrix<T, R, C> {
                self.$method(s)
            }
        }
    };
}

impl_binary!(Add, add, add_elem);
impl_binary!(Sub, sub, sub_elem);
impl_binary!(Mul, mul, mul_elem);
impl_scalar_rhs!(Add, add, add_scalar);
impl_scalar_rhs!(Sub, sub, sub_scalar);
impl_scalar_rhs!(Mul, mul, mul_scalar);

impl<T: Scalar, const R: usize, const C: usize> Div for Matrix<T, R, C> {
    type Output = Result<Self, LinalgError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.div_elem(&rhs)
    }
}

impl<'a, T: Scalar, const R: usize, const C: usize> Div<&'a Matrix<T, R, C>> for &'a Matrix<T, R, C> {
    type Output = Result<Matrix<T, R, C>, LinalgError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.div_elem(rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Result<Self, LinalgError>;

    fn div(self, s: T) -> Self::Output {
        self.div_scalar(s)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for &Matrix<T, R, C> {
    type Output = Result<Matrix<T, R, C>, LinalgError>;

    fn div(self, s: T) -> Self::Output {
        self.div_scalar(s)
    }
}

impl<T: Scalar + Neg<Output = T>, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.neg_elems()
    }
}

impl<T: Scalar + Neg<Output = T>, const R: usize, const C: usize> Neg for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Matrix<T, R, C> {
        self.neg_elems()
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: &Self) {
        self.add_assign_elem(rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: &Self) {
        self.sub_assign_elem(rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: &Self) {
        self.mul_assign_elem(rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign<T> for Matrix<T, R, C> {
    fn add_assign(&mut self, s: T) {
        self.add_assign_scalar(s);
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign<T> for Matrix<T, R, C> {
    fn sub_assign(&mut self, s: T) {
        self.sub_assign_scalar(s);
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, s: T) {
        self.mul_assign_scalar(s);
    }
}

// Scalar on the left, for owned and borrowed matrices.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl<const R: usize, const C: usize> Add<Matrix<$t, R, C>> for $t {
            type Output = Matrix<$t, R, C>;

            fn add(self, m: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                m.add_scalar(self)
            }
        }

        impl<const R: usize, const C: usize> Add<&Matrix<$t, R, C>> for $t {
            type Output = Matrix<$t, R, C>;

            fn add(self, m: &Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                m.add_scalar(self)
            }
        }

        impl<const R: usize, const C: usize> Sub<Matrix<$t, R, C>> for $t {
            type Output = Matrix<$t, R, C>;

            fn sub(self, m: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                m.rsub_scalar(self)
            }
        }

        impl<const R: usize, const C: usize> Sub<&Matrix<$t, R, C>> for $t {
            type Output = Matrix<$t, R, C>;

            fn sub(self, m: &Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                m.rsub_scalar(self)
            }
        }

        impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
            type Output = Matrix<$t, R, C>;

            fn mul(self, m: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                m.mul_scalar(self)
            }
        }

        impl<const R: usize, const C: usize> Mul<&Matrix<$t, R, C>> for $t {
            type Output = Matrix<$t, R, C>;

            fn mul(self, m: &Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                m.mul_scalar(self)
            }
        }

        impl<const R: usize, const C: usize> Div<Matrix<$t, R, C>> for $t {
            type Output = Result<Matrix<$t, R, C>, LinalgError>;

            fn div(self, m: Matrix<$t, R, C>) -> Self::Output {
                m.rdiv_scalar(self)
            }
        }

        impl<const R: usize, const C: usize> Div<&Matrix<$t, R, C>> for $t {
            type Output = Result<Matrix<$t, R, C>, LinalgError>;

            fn div(self, m: &Matrix<$t, R, C>) -> Self::Output {
                m.rdiv_scalar(self)
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
