//! Fixed-shape dense matrix with aliasing row/column views.
//!
//! A `Matrix<T, R, C>` either owns its buffer or is a *view*: a window onto
//! another matrix's buffer described by a stride and an offset (see
//! [`storage`](super::storage)). [`Matrix::row`] and [`Matrix::col`] return
//! views. Writing through a view writes the parent, and the parent's writes
//! show through the view. This aliasing is the point of views.
//!
//! Results of arithmetic, `map`, `mm` and `transpose` are always freshly owned.

use super::storage::Storage;
use crate::core::traits::{Elementwise, MatVec, Scalar};
use crate::error::LinalgError;
use crate::vector::Vector;
use crate::vector::dense::write_bracketed;
use std::fmt;
use std::rc::Rc;

/// Dense `R × C` matrix, logically row-major.
///
/// Element reads and writes go through [`get`](Self::get) and
/// [`set`](Self::set). `set` takes `&mut self`, yet any other view onto the
/// same buffer observes the write.
pub struct Matrix<T, const R: usize, const C: usize> {
    storage: Storage<T>,
}

/// Column vector, `N × 1`.
pub type ColVec<T, const N: usize> = Matrix<T, N, 1>;
/// Row vector, `1 × N`.
pub type RowVec<T, const N: usize> = Matrix<T, 1, N>;

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    fn from_storage(storage: Storage<T>) -> Self {
        Self { storage }
    }

    /// Build each element from its `(row, col)` position.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self::from_storage(Storage::owned((0..R * C).map(|k| f(k / C, k % C))))
    }

    /// Broadcast `value` into every slot.
    pub fn splat(value: T) -> Self {
        Self::from_storage(Storage::owned(std::iter::repeat_n(value, R * C)))
    }

    /// Construct from nested row arrays: `rows[i][j]` becomes element `(i, j)`.
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self::from_fn(|i, j| rows[i][j])
    }

    /// Construct from exactly `R * C` values in row-major order.
    pub fn from_row_major(values: &[T]) -> Result<Self, LinalgError> {
        if values.len() != R * C {
            return Err(LinalgError::DimensionMismatch {
                expected: R * C,
                found: values.len(),
            });
        }
        Ok(Self::from_storage(Storage::owned(values.iter().copied())))
    }

    /// `(R, C)`.
    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    /// Number of elements, `R * C`.
    pub const fn len(&self) -> usize {
        R * C
    }

    /// True when either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        R * C == 0
    }

    /// True when this matrix aliases another matrix's buffer.
    pub fn is_view(&self) -> bool {
        self.storage.is_view()
    }

    /// True when both matrices address the same backing buffer.
    pub fn shares_buffer<const R2: usize, const C2: usize>(&self, other: &Matrix<T, R2, C2>) -> bool {
        Rc::ptr_eq(self.storage.buffer(), other.storage.buffer())
    }

    /// Element `(i, j)`.
    ///
    /// # Panics
    /// If `i >= R` or `j >= C`.
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < R && j < C, "index ({}, {}) out of bounds for {}x{} matrix", i, j, R, C);
        self.storage.get(i * C + j)
    }

    /// Overwrite element `(i, j)`, visible through every alias of the buffer.
    ///
    /// # Panics
    /// If `i >= R` or `j >= C`.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < R && j < C, "index ({}, {}) out of bounds for {}x{} matrix", i, j, R, C);
        self.storage.set(i * C + j, value)
    }

    /// Checked read of `(i, j)`. `OutOfBounds` names the failing axis:
    /// the row index against `R`, or the column index against `C`.
    pub fn try_get(&self, i: usize, j: usize) -> Result<T, LinalgError> {
        check_index(i, j, R, C)?;
        Ok(self.storage.get(i * C + j))
    }

    /// Checked write of `(i, j)`, visible through every alias of the buffer.
    pub fn try_set(&mut self, i: usize, j: usize, value: T) -> Result<(), LinalgError> {
        check_index(i, j, R, C)?;
        self.storage.set(i * C + j, value);
        Ok(())
    }

    /// Element at logical flat index `k = i * C + j`; natural for row and
    /// column vectors.
    ///
    /// # Panics
    /// If `k >= R * C`.
    pub fn get_flat(&self, k: usize) -> T {
        assert!(k < R * C, "flat index {} out of bounds for {}x{} matrix", k, R, C);
        self.storage.get(k)
    }

    /// # Panics
    /// If `k >= R * C`.
    pub fn set_flat(&mut self, k: usize, value: T) {
        assert!(k < R * C, "flat index {} out of bounds for {}x{} matrix", k, R, C);
        self.storage.set(k, value)
    }

    /// Aliasing view of row `i`.
    ///
    /// The view is writable even though `self` is borrowed immutably:
    /// an immutable binding of the parent does not protect it from writes
    /// made through the returned view.
    ///
    /// ```
    /// use moldyn::Matrix;
    ///
    /// let m = Matrix::from_rows([[1, 2], [3, 4]]);
    /// let mut r = m.row(1);
    /// r.set(0, 0, 30);
    /// assert_eq!(m.get(1, 0), 30);
    /// ```
    ///
    /// # Panics
    /// If `i >= R`.
    pub fn row(&self, i: usize) -> RowVec<T, C> {
        assert!(i < R, "row {} out of bounds for {}x{} matrix", i, R, C);
        let storage = self.storage.window(1, i * C, C);
        log::trace!(
            "row view {}: stride {} offset {}",
            i,
            storage.stride(),
            storage.offset()
        );
        Matrix::from_storage(storage)
    }

    /// Aliasing view of column `j`.
    ///
    /// The view is writable even though `self` is borrowed immutably:
    /// an immutable binding of the parent does not protect it from writes
    /// made through the returned view.
    ///
    /// # Panics
    /// If `j >= C`.
    pub fn col(&self, j: usize) -> ColVec<T, R> {
        assert!(j < C, "column {} out of bounds for {}x{} matrix", j, R, C);
        let storage = self.storage.window(C, j, R);
        log::trace!(
            "column view {}: stride {} offset {}",
            j,
            storage.stride(),
            storage.offset()
        );
        Matrix::from_storage(storage)
    }

    /// Owned deep copy, detached from any aliases.
    pub fn materialize(&self) -> Self {
        Self::from_storage(self.storage.deep_copy(R * C))
    }

    /// Elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..R * C).map(move |k| self.storage.get(k))
    }

    /// Copy out as nested row arrays.
    pub fn to_rows(&self) -> [[T; C]; R] {
        std::array::from_fn(|i| std::array::from_fn(|j| self.get(i, j)))
    }

    /// Apply `f` to every element, yielding an owned matrix.
    pub fn map<U: Copy, F: FnMut(T) -> U>(&self, f: F) -> Matrix<U, R, C> {
        Matrix::from_storage(Storage::owned(self.iter().map(f)))
    }

    /// Combine paired elements of `self` and `other` with `f`.
    pub fn map2<U, V, F>(&self, other: &Matrix<U, R, C>, mut f: F) -> Matrix<V, R, C>
    where
        U: Copy,
        V: Copy,
        F: FnMut(T, U) -> V,
    {
        Matrix::from_storage(Storage::owned(self.iter().zip(other.iter()).map(|(a, b)| f(a, b))))
    }

    /// `C × R` matrix with `(i, j)` moved to `(j, i)`.
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|i, j| self.get(j, i))
    }
}

fn check_index(i: usize, j: usize, rows: usize, cols: usize) -> Result<(), LinalgError> {
    if i >= rows {
        return Err(LinalgError::OutOfBounds { index: i, len: rows });
    }
    if j >= cols {
        return Err(LinalgError::OutOfBounds { index: j, len: cols });
    }
    Ok(())
}

impl<T: Copy + PartialOrd, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Per-element `==`, as a same-shape boolean matrix.
    pub fn eq_elem(&self, other: &Self) -> Matrix<bool, R, C> {
        self.map2(other, |a, b| a == b)
    }

    /// Per-element `!=`.
    pub fn ne_elem(&self, other: &Self) -> Matrix<bool, R, C> {
        self.map2(other, |a, b| a != b)
    }

    /// Per-element `<`.
    pub fn lt_elem(&self, other: &Self) -> Matrix<bool, R, C> {
        self.map2(other, |a, b| a < b)
    }

    /// Per-element `>`.
    pub fn gt_elem(&self, other: &Self) -> Matrix<bool, R, C> {
        self.map2(other, |a, b| a > b)
    }

    /// Per-element `<=`.
    pub fn le_elem(&self, other: &Self) -> Matrix<bool, R, C> {
        self.map2(other, |a, b| a <= b)
    }

    /// Per-element `>=`.
    pub fn ge_elem(&self, other: &Self) -> Matrix<bool, R, C> {
        self.map2(other, |a, b| a >= b)
    }
}

impl<const R: usize, const C: usize> Matrix<bool, R, C> {
    /// True when every entry is true.
    pub fn all(&self) -> bool {
        self.iter().all(|b| b)
    }

    /// True when at least one entry is true.
    pub fn any(&self) -> bool {
        self.iter().any(|b| b)
    }

    /// Number of `true` entries.
    pub fn count(&self) -> usize {
        self.iter().filter(|&b| b).count()
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Matrix of additive identities.
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Matrix product `self · other`.
    pub fn mm<const K: usize>(&self, other: &Matrix<T, C, K>) -> Matrix<T, R, K> {
        let mut acc = vec![T::zero(); R * K];
        for i in 0..R {
            for j in 0..C {
                let a = self.get(i, j);
                for k in 0..K {
                    acc[i * K + k] = acc[i * K + k] + a * other.get(j, k);
                }
            }
        }
        Matrix::from_storage(Storage::owned(acc))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Square identity matrix.
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Scalar, const R: usize, const C: usize> Elementwise for Matrix<T, R, C> {
    type Elem = T;

    fn len(&self) -> usize {
        R * C
    }

    fn try_map_indexed<E, F>(&self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize, T) -> Result<T, E>,
    {
        let mut out = Vec::with_capacity(R * C);
        for (k, x) in self.iter().enumerate() {
            out.push(f(k, x)?);
        }
        Ok(Self::from_storage(Storage::owned(out)))
    }

    fn try_zip_indexed<E, F>(&self, other: &Self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize, T, T) -> Result<T, E>,
    {
        let mut out = Vec::with_capacity(R * C);
        for (k, (x, y)) in self.iter().zip(other.iter()).enumerate() {
            out.push(f(k, x, y)?);
        }
        Ok(Self::from_storage(Storage::owned(out)))
    }

    fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.iter().fold(init, f)
    }

    /// Writes through views. `src` is read in full before the first write, so
    /// overlapping aliases are safe.
    fn assign(&mut self, src: &Self) {
        let values: Vec<T> = src.iter().collect();
        for (k, v) in values.into_iter().enumerate() {
            self.storage.set(k, v);
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> MatVec<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn matvec(&self, x: &Vector<T, C>) -> Vector<T, R> {
        Vector::from_fn(|i| (0..C).fold(T::zero(), |acc, j| acc + self.get(i, j) * x[j]))
    }
}

/// Owned matrices clone deeply; cloning a view yields another alias of the
/// same buffer. Use [`Matrix::materialize`] for a detached copy of a view.
impl<T: Copy, const R: usize, const C: usize> Clone for Matrix<T, R, C> {
    fn clone(&self) -> Self {
        match &self.storage {
            Storage::Owned(_) => self.materialize(),
            Storage::View { buf, stride, offset } => Self::from_storage(Storage::View {
                buf: Rc::clone(buf),
                stride: *stride,
                offset: *offset,
            }),
        }
    }
}

impl<T: Copy + Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

/// Compares logical elements, regardless of storage.
impl<T: Copy + PartialEq, const R: usize, const C: usize> PartialEq for Matrix<T, R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Copy + fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.to_rows())
            .field("view", &self.is_view())
            .finish()
    }
}

/// Renders each row like a [`Vector`], wrapped in outer brackets:
/// `[ [ 1, 2 ], [ 3, 4 ] ]`. An empty matrix renders as `[ ]`.
impl<T: Copy + fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if R == 0 || C == 0 {
            return f.write_str("[ ]");
        }
        f.write_str("[ ")?;
        for i in 0..R {
            write_bracketed(f, (0..C).map(|j| self.get(i, j)))?;
            if i + 1 < R {
                f.write_str(", ")?;
            }
        }
        f.write_str(" ]")
    }
}

impl<T: Copy, const N: usize> From<Vector<T, N>> for ColVec<T, N> {
    fn from(v: Vector<T, N>) -> Self {
        Self::from_storage(Storage::owned(v.into_array()))
    }
}

impl<T: Copy, const N: usize> From<&ColVec<T, N>> for Vector<T, N> {
    fn from(m: &ColVec<T, N>) -> Self {
        Vector::from_fn(|i| m.get_flat(i))
    }
}
