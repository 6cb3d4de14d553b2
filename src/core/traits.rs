//! Core linear-algebra traits for moldyn.
//!
//! [`Elementwise`] is the operation surface shared by [`Vector`](crate::Vector)
//! and [`Matrix`](crate::Matrix). Implementors supply four primitives (indexed
//! map, indexed zip, fold, in-place assign); arithmetic, checked division,
//! in-place chaining and reductions are provided on top of them. The operator
//! impls (`+ - * /`) are thin sugar over these named methods.

use crate::error::LinalgError;
use num_traits::{Num, One, Zero};
use std::convert::Infallible;
use std::ops::Neg;

/// Numeric element type usable in vectors and matrices.
pub trait Scalar: Copy + PartialOrd + Num {}

impl<T> Scalar for T where T: Copy + PartialOrd + Num {}

/// Matrix–vector product: y = A · x.
pub trait MatVec<X> {
    type Output;
    /// Compute A · x.
    fn matvec(&self, x: &X) -> Self::Output;
}

/// Quotient `lhs / rhs`, failing with `DivisionByZero` tagged with `index`.
#[inline]
pub(crate) fn checked_quotient<T: Scalar>(index: usize, lhs: T, rhs: T) -> Result<T, LinalgError> {
    if rhs == T::zero() {
        return Err(LinalgError::DivisionByZero { index });
    }
    Ok(lhs / rhs)
}

/// Fixed-shape containers whose elements can be visited in flat order.
pub trait Elementwise: Sized {
    /// Element type.
    type Elem: Scalar;

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a same-shape container from `f(k, x_k)`, stopping at the first error.
    fn try_map_indexed<E, F>(&self, f: F) -> Result<Self, E>
    where
        F: FnMut(usize, Self::Elem) -> Result<Self::Elem, E>;

    /// Build a same-shape container from `f(k, x_k, y_k)`, stopping at the first error.
    fn try_zip_indexed<E, F>(&self, other: &Self, f: F) -> Result<Self, E>
    where
        F: FnMut(usize, Self::Elem, Self::Elem) -> Result<Self::Elem, E>;

    /// Left fold over the elements in flat order.
    fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, Self::Elem) -> A;

    /// Overwrite every element of `self` with the matching element of `src`.
    fn assign(&mut self, src: &Self);

    /// Apply `f` to every element, keeping the element type.
    fn map_elems<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Self::Elem) -> Self::Elem,
    {
        self.try_map_indexed(|_, x| Ok::<_, Infallible>(f(x)))
            .unwrap_or_else(|e| match e {})
    }

    /// Combine paired elements with `f`.
    fn zip_elems<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(Self::Elem, Self::Elem) -> Self::Elem,
    {
        self.try_zip_indexed(other, |_, x, y| Ok::<_, Infallible>(f(x, y)))
            .unwrap_or_else(|e| match e {})
    }

    /// Elementwise sum.
    fn add_elem(&self, other: &Self) -> Self {
        self.zip_elems(other, |x, y| x + y)
    }

    /// Elementwise difference.
    fn sub_elem(&self, other: &Self) -> Self {
        self.zip_elems(other, |x, y| x - y)
    }

    /// Elementwise (Hadamard) product.
    fn mul_elem(&self, other: &Self) -> Self {
        self.zip_elems(other, |x, y| x * y)
    }

    /// Elementwise quotient. Fails on the first zero divisor.
    fn div_elem(&self, other: &Self) -> Result<Self, LinalgError> {
        self.try_zip_indexed(other, checked_quotient)
    }

    /// Add `s` to every element.
    fn add_scalar(&self, s: Self::Elem) -> Self {
        self.map_elems(|x| x + s)
    }

    /// Subtract `s` from every element.
    fn sub_scalar(&self, s: Self::Elem) -> Self {
        self.map_elems(|x| x - s)
    }

    /// Multiply every element by `s`.
    fn mul_scalar(&self, s: Self::Elem) -> Self {
        self.map_elems(|x| x * s)
    }

    /// Divide every element by `s`. A zero `s` fails at the first element.
    fn div_scalar(&self, s: Self::Elem) -> Result<Self, LinalgError> {
        self.try_map_indexed(|k, x| checked_quotient(k, x, s))
    }

    /// `s - x` for every element `x`.
    fn rsub_scalar(&self, s: Self::Elem) -> Self {
        self.map_elems(|x| s - x)
    }

    /// `s / x` for every element `x`; every element acts as a divisor.
    fn rdiv_scalar(&self, s: Self::Elem) -> Result<Self, LinalgError> {
        self.try_map_indexed(|k, x| checked_quotient(k, s, x))
    }

    /// Flip the sign of every element.
    fn neg_elems(&self) -> Self
    where
        Self::Elem: Neg<Output = Self::Elem>,
    {
        self.map_elems(|x| -x)
    }

    /// In-place elementwise sum; returns `self` for chaining.
    fn add_assign_elem(&mut self, other: &Self) -> &mut Self {
        let r = self.add_elem(other);
        self.assign(&r);
        self
    }

    /// In-place elementwise difference.
    fn sub_assign_elem(&mut self, other: &Self) -> &mut Self {
        let r = self.sub_elem(other);
        self.assign(&r);
        self
    }

    /// In-place elementwise product.
    fn mul_assign_elem(&mut self, other: &Self) -> &mut Self {
        let r = self.mul_elem(other);
        self.assign(&r);
        self
    }

    /// In-place quotient. On failure the receiver is left unchanged.
    fn div_assign_elem(&mut self, other: &Self) -> Result<&mut Self, LinalgError> {
        let r = self.div_elem(other)?;
        self.assign(&r);
        Ok(self)
    }

    /// In-place scalar sum.
    fn add_assign_scalar(&mut self, s: Self::Elem) -> &mut Self {
        let r = self.add_scalar(s);
        self.assign(&r);
        self
    }

    /// In-place scalar difference.
    fn sub_assign_scalar(&mut self, s: Self::Elem) -> &mut Self {
        let r = self.sub_scalar(s);
        self.assign(&r);
        self
    }

    /// In-place scalar product.
    fn mul_assign_scalar(&mut self, s: Self::Elem) -> &mut Self {
        let r = self.mul_scalar(s);
        self.assign(&r);
        self
    }

    /// In-place scalar quotient. On failure the receiver is left unchanged.
    fn div_assign_scalar(&mut self, s: Self::Elem) -> Result<&mut Self, LinalgError> {
        let r = self.div_scalar(s)?;
        self.assign(&r);
        Ok(self)
    }

    /// Fold seeded with the first element; `None` when empty.
    fn reduce<F>(&self, mut f: F) -> Option<Self::Elem>
    where
        F: FnMut(Self::Elem, Self::Elem) -> Self::Elem,
    {
        self.fold(None, |acc, x| match acc {
            None => Some(x),
            Some(a) => Some(f(a, x)),
        })
    }

    /// Sum of all elements; the empty sum is zero.
    fn sum(&self) -> Self::Elem {
        self.fold(Self::Elem::zero(), |acc, x| acc + x)
    }

    /// Product of all elements; the empty product is one.
    fn prod(&self) -> Self::Elem {
        self.fold(Self::Elem::one(), |acc, x| acc * x)
    }

    /// Smallest element, or `None` when empty.
    fn min(&self) -> Option<Self::Elem> {
        self.reduce(|a, b| if b < a { b } else { a })
    }

    /// Largest element, or `None` when empty.
    fn max(&self) -> Option<Self::Elem> {
        self.reduce(|a, b| if b > a { b } else { a })
    }
}
