//! Fixed-length dense vector over a numeric scalar.
//!
//! `Vector<T, N>` owns a `[T; N]` and has plain value semantics: copies are
//! deep and the length is fixed by the type. Arithmetic, checked division,
//! in-place chaining and reductions come from [`Elementwise`]; comparisons
//! produce `Vector<bool, N>` masks rather than a single boolean.

use crate::config::options::NormalizeOptions;
use crate::core::traits::{Elementwise, Scalar};
use crate::error::LinalgError;
use crate::utils::fast_math::fast_inverse_sqrt;
use num_traits::Float;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense vector of `N` elements of type `T`.
///
/// Indexing with `v[i]` panics when `i >= N`; use [`Vector::try_get`] for a
/// checked read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    /// Construct from exactly `N` values.
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Build each element from its index.
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self { data: std::array::from_fn(f) }
    }

    /// Number of elements, always `N`.
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for `N == 0`.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Elements as a slice of length `N`.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the elements; the length cannot change.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Unwrap into the backing array.
    pub fn into_array(self) -> [T; N] {
        self.data
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Broadcast `value` into every slot.
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Checked read of element `i`.
    pub fn try_get(&self, i: usize) -> Result<T, LinalgError> {
        self.data
            .get(i)
            .copied()
            .ok_or(LinalgError::OutOfBounds { index: i, len: N })
    }

    /// Apply `f` to every element. Elements are visited in index order, but
    /// callers should not rely on it.
    pub fn map<U, F: FnMut(T) -> U>(&self, f: F) -> Vector<U, N> {
        Vector { data: self.data.map(f) }
    }

    /// Combine paired elements of `self` and `other` with `f`.
    pub fn map2<U: Copy, V, F>(&self, other: &Vector<U, N>, mut f: F) -> Vector<V, N>
    where
        F: FnMut(T, U) -> V,
    {
        Vector::from_fn(|i| f(self.data[i], other.data[i]))
    }
}

impl<T: Copy + PartialOrd, const N: usize> Vector<T, N> {
    /// Per-element `==`. Index `i` is true iff `self[i] == other[i]`;
    /// use `==` on the vectors for a single aggregate answer.
    pub fn eq_elem(&self, other: &Self) -> Vector<bool, N> {
        self.map2(other, |a, b| a == b)
    }

    /// Per-element `!=`.
    pub fn ne_elem(&self, other: &Self) -> Vector<bool, N> {
        self.map2(other, |a, b| a != b)
    }

    /// Per-element `<`.
    pub fn lt_elem(&self, other: &Self) -> Vector<bool, N> {
        self.map2(other, |a, b| a < b)
    }

    /// Per-element `>`.
    pub fn gt_elem(&self, other: &Self) -> Vector<bool, N> {
        self.map2(other, |a, b| a > b)
    }

    /// Per-element `<=`.
    pub fn le_elem(&self, other: &Self) -> Vector<bool, N> {
        self.map2(other, |a, b| a <= b)
    }

    /// Per-element `>=`.
    pub fn ge_elem(&self, other: &Self) -> Vector<bool, N> {
        self.map2(other, |a, b| a >= b)
    }
}

impl<const N: usize> Vector<bool, N> {
    /// True when every entry is true; vacuously true when empty.
    pub fn all(&self) -> bool {
        self.data.iter().all(|&b| b)
    }

    /// True when at least one entry is true.
    pub fn any(&self) -> bool {
        self.data.iter().any(|&b| b)
    }

    /// Number of `true` entries.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Vector of additive identities.
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Sum of elementwise products.
    pub fn dot(&self, other: &Self) -> T {
        self.mul_elem(other).sum()
    }

    /// Squared Euclidean norm.
    pub fn mag2(&self) -> T {
        self.dot(self)
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Euclidean norm.
    pub fn mag(&self) -> T {
        self.mag2().sqrt()
    }

    /// Unit vector in the direction of `self`, or the zero vector when the
    /// magnitude does not exceed `tol`.
    pub fn normalize(&self, tol: T) -> Self {
        let mag = self.mag();
        if mag > tol {
            self.map(|x| x / mag)
        } else {
            Self::zeros()
        }
    }

    /// [`normalize`](Self::normalize) with the tolerance taken from `opts`.
    pub fn normalize_with(&self, opts: &NormalizeOptions) -> Self {
        let tol = num_traits::cast(opts.tolerance).unwrap_or_else(T::epsilon);
        self.normalize(tol)
    }

    /// [`normalize`](Self::normalize) with the default tolerance.
    pub fn normalized(&self) -> Self {
        self.normalize_with(&NormalizeOptions::default())
    }

    /// Normalize with the single-precision fast inverse square root.
    ///
    /// Accurate to a fraction of a percent. The zero vector maps to itself.
    /// The fast path needs the squared magnitude to be a normal `f32`; when it
    /// underflows or overflows `f32` (common for `f64` input) the exact
    /// [`normalize`](Self::normalize) with zero tolerance is used instead.
    pub fn normalize_fast(&self) -> Self {
        let mag2 = self.mag2();
        if mag2 == T::zero() {
            return Self::zeros();
        }
        let inv_mag = num_traits::cast::<T, f32>(mag2)
            .filter(|m| m.is_normal())
            .map(fast_inverse_sqrt)
            .and_then(num_traits::cast::<f32, T>);
        match inv_mag {
            Some(s) if s > T::zero() => self.mul_scalar(s),
            _ => self.normalize(T::zero()),
        }
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Right-handed cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        cross(self, other)
    }
}

/// 3D cross product `a × b`.
pub fn cross<T: Scalar>(a: &Vector<T, 3>, b: &Vector<T, 3>) -> Vector<T, 3> {
    Vector::new([
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

impl<T: Scalar, const N: usize> Elementwise for Vector<T, N> {
    type Elem = T;

    fn len(&self) -> usize {
        N
    }

    fn try_map_indexed<E, F>(&self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize, T) -> Result<T, E>,
    {
        let mut data = self.data;
        for (k, x) in data.iter_mut().enumerate() {
            *x = f(k, *x)?;
        }
        Ok(Self { data })
    }

    fn try_zip_indexed<E, F>(&self, other: &Self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize, T, T) -> Result<T, E>,
    {
        let mut data = self.data;
        for (k, (x, &y)) in data.iter_mut().zip(other.data.iter()).enumerate() {
            *x = f(k, *x, y)?;
        }
        Ok(Self { data })
    }

    fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.data.iter().copied().fold(init, f)
    }

    fn assign(&mut self, src: &Self) {
        self.data = src.data;
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = LinalgError;

    /// Requires exactly `N` values; shorter or longer slices are rejected.
    fn try_from(values: &[T]) -> Result<Self, LinalgError> {
        let data: [T; N] = values.try_into().map_err(|_| LinalgError::DimensionMismatch {
            expected: N,
            found: values.len(),
        })?;
        Ok(Self { data })
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

/// Renders as `[ e0, e1, ..., eN-1 ]`, or `[ ]` when empty.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.data.iter())
    }
}

pub(crate) fn write_bracketed<T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display,
    I: IntoIterator<Item = T>,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return f.write_str("[ ]");
    }
    f.write_str("[ ")?;
    while let Some(x) = items.next() {
        write!(f, "{}", x)?;
        if items.peek().is_some() {
            f.write_str(", ")?;
        }
    }
    f.write_str(" ]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn construction_paths() {
        let v = Vector::new([1.0_f32, 2.0, 3.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);

        let s = Vector::<f32, 3>::splat(1.0);
        assert_eq!(s, Vector::new([1.0, 1.0, 1.0]));

        let mut copy = v;
        copy[0] = 9.0;
        assert_eq!(v[0], 1.0, "copies must be deep");
    }

    #[test]
    fn slice_construction_requires_exact_length() {
        let short: &[f64] = &[1.0, 2.0];
        let err = Vector::<f64, 3>::try_from(short).unwrap_err();
        assert!(matches!(err, LinalgError::DimensionMismatch { expected: 3, found: 2 }));

        let exact: &[f64] = &[1.0, 2.0, 3.0];
        assert_eq!(Vector::<f64, 3>::try_from(exact).unwrap(), Vector::new([1.0, 2.0, 3.0]));
    }

    #[test]
    fn checked_access() {
        let v = Vector::new([4, 5]);
        assert_eq!(v.try_get(1).unwrap(), 5);
        assert!(matches!(v.try_get(2), Err(LinalgError::OutOfBounds { index: 2, len: 2 })));
    }

    #[test]
    fn map_changes_element_type() {
        let v = Vector::new([1.5_f64, -2.0, 0.0]);
        let signs = v.map(|x| x >= 0.0);
        assert_eq!(signs, Vector::new([true, false, true]));
    }

    #[test]
    fn reductions() {
        let v = Vector::new([2, -3, 4]);
        assert_eq!(v.sum(), 3);
        assert_eq!(v.prod(), -24);
        assert_eq!(v.min(), Some(-3));
        assert_eq!(v.max(), Some(4));

        let empty = Vector::<i32, 0>::new([]);
        assert_eq!(empty.sum(), 0);
        assert_eq!(empty.prod(), 1);
        assert_eq!(empty.min(), None);
    }

    #[test]
    fn normalize_fast_close_to_exact() {
        let v = Vector::new([3.0_f64, 4.0, 12.0]);
        let exact = v.normalized();
        let fast = v.normalize_fast();
        for i in 0..3 {
            assert_abs_diff_eq!(exact[i], fast[i], epsilon = 5e-3);
        }
        assert_abs_diff_eq!(fast.mag(), 1.0, epsilon = 5e-3);
    }

    #[test]
    fn normalize_fast_outside_f32_range() {
        let tiny = Vector::new([1e-25_f64, 0.0, 0.0]).normalize_fast();
        assert_abs_diff_eq!(tiny[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tiny.mag(), 1.0, epsilon = 1e-12);

        let huge = Vector::new([0.0, 1e20_f64, 0.0]).normalize_fast();
        assert_abs_diff_eq!(huge[1], 1.0, epsilon = 1e-12);
        assert_eq!((huge[0], huge[2]), (0.0, 0.0));

        let subnormal = Vector::new([1e-20_f32, 0.0, 0.0]).normalize_fast();
        assert_abs_diff_eq!(subnormal[0], 1.0, epsilon = 1e-4);

        assert_eq!(Vector::<f64, 3>::zeros().normalize_fast(), Vector::zeros());
    }

    #[test]
    fn display_format() {
        assert_eq!(Vector::new([1, 2, 3]).to_string(), "[ 1, 2, 3 ]");
        assert_eq!(Vector::new([7]).to_string(), "[ 7 ]");
        assert_eq!(Vector::<i32, 0>::new([]).to_string(), "[ ]");
    }
}
