//! Wrappers between moldyn matrices and `faer::Mat`.
//!
//! Fixed-shape matrices convert to and from faer's dynamic dense matrices so
//! results can be handed to faer's solvers and decompositions, which moldyn
//! does not provide. Conversion always copies; a `faer::Mat` built from a
//! view holds the view's logical elements, not the parent buffer.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::Scalar;
use crate::error::LinalgError;
use crate::matrix::Matrix;
use faer::Mat;

impl<T: Scalar, const R: usize, const C: usize> From<&Matrix<T, R, C>> for Mat<T> {
    fn from(m: &Matrix<T, R, C>) -> Self {
        Mat::from_fn(R, C, |i, j| m.get(i, j))
    }
}

/// Fails with `DimensionMismatch` unless the faer matrix is exactly `R × C`.
impl<T: Scalar, const R: usize, const C: usize> TryFrom<&Mat<T>> for Matrix<T, R, C> {
    type Error = LinalgError;

    fn try_from(mat: &Mat<T>) -> Result<Self, LinalgError> {
        if mat.nrows() != R || mat.ncols() != C {
            return Err(LinalgError::DimensionMismatch {
                expected: R * C,
                found: mat.nrows() * mat.ncols(),
            });
        }
        Ok(Matrix::from_fn(|i, j| mat[(i, j)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_faer() {
        let m = Matrix::from_rows([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let f = Mat::from(&m);
        assert_eq!((f.nrows(), f.ncols()), (2, 3));
        assert_eq!(f[(1, 0)], 4.0);
        let back = Matrix::<f64, 2, 3>::try_from(&f).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let f = Mat::<f64>::zeros(3, 3);
        let err = Matrix::<f64, 2, 3>::try_from(&f).unwrap_err();
        assert!(matches!(err, LinalgError::DimensionMismatch { expected: 6, found: 9 }));
    }

    #[test]
    fn view_converts_logical_elements() {
        let m = Matrix::from_rows([[1.0_f64, 2.0], [3.0, 4.0]]);
        let f = Mat::from(&m.col(1));
        assert_eq!((f.nrows(), f.ncols()), (2, 1));
        assert_eq!((f[(0, 0)], f[(1, 0)]), (2.0, 4.0));
    }
}
