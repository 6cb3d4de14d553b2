//! Tests for dense matrices: products, transposition, aliasing row/column
//! views, and agreement with faer.

use approx::assert_abs_diff_eq;
use faer::Mat;
use moldyn::{ColVec, Elementwise, LinalgError, MatVec, Matrix, Vector};
use rand::Rng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_matrix<const R: usize, const C: usize>(rng: &mut impl Rng) -> Matrix<f64, R, C> {
    Matrix::from_fn(|_, _| rng.r#gen::<f64>() - 0.5)
}

/// Multiplying by the identity on either side returns the matrix unchanged.
#[test]
fn identity_is_neutral_for_mm() {
    let mut rng = rand::thread_rng();
    let a: Matrix<f64, 4, 3> = random_matrix(&mut rng);
    assert_eq!(Matrix::<f64, 4, 4>::identity().mm(&a), a);
    assert_eq!(a.mm(&Matrix::<f64, 3, 3>::identity()), a);
}

/// Transposing twice is a no-op, and `(AB)^T = B^T A^T`.
#[test]
fn transpose_twice_is_identity_and_reverses_products() {
    let mut rng = rand::thread_rng();
    let a: Matrix<f64, 2, 5> = random_matrix(&mut rng);
    let b: Matrix<f64, 5, 3> = random_matrix(&mut rng);
    assert_eq!(a.transpose().transpose(), a);

    let lhs = a.mm(&b).transpose();
    let rhs = b.transpose().mm(&a.transpose());
    for (x, y) in lhs.iter().zip(rhs.iter()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-12);
    }
}

/// Products agree with faer's dense multiplication.
#[test]
fn mm_matches_faer() {
    let mut rng = rand::thread_rng();
    let a: Matrix<f64, 6, 4> = random_matrix(&mut rng);
    let b: Matrix<f64, 4, 5> = random_matrix(&mut rng);
    let ours = a.mm(&b);
    let (fa, fb) = (Mat::from(&a), Mat::from(&b));
    let theirs = Matrix::<f64, 6, 5>::try_from(&(&fa * &fb)).unwrap();
    for (x, y) in ours.iter().zip(theirs.iter()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-12);
    }
}

/// Writes through a row view land in the parent, and parent writes show through the view.
#[test]
fn writes_through_a_row_view_reach_the_parent() {
    init_logging();
    let mut m = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    let mut r = m.row(1);
    r.set(0, 2, 60);
    assert_eq!(m.get(1, 2), 60);

    m.set(1, 0, 40);
    assert_eq!(r.get_flat(0), 40);
    assert_eq!(r.to_rows(), [[40, 5, 60]]);
}

/// Same aliasing round-trip for a strided column view.
#[test]
fn writes_through_a_column_view_reach_the_parent() {
    init_logging();
    let mut m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    let mut c = m.col(1);
    c.mul_assign_scalar(10.0);
    assert_eq!(m.to_rows(), [[1.0, 20.0], [3.0, 40.0], [5.0, 60.0]]);

    m.set(2, 1, -1.0);
    assert_eq!(c.get_flat(2), -1.0);
    assert_eq!(Vector::from(&c), Vector::new([20.0, 40.0, -1.0]));
}

/// Products read views through their stride and offset.
#[test]
fn views_as_mm_operands() {
    let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    assert_eq!(m.row(1).mm(&m.col(2)).to_rows(), [[96]]);

    let c = m.col(0);
    assert_eq!(c.transpose().mm(&c).to_rows(), [[66]]);
    assert_eq!(
        c.mm(&m.row(0)).to_rows(),
        [[1, 2, 3], [4, 8, 12], [7, 14, 21]]
    );

    // 1x1 view of a column view: m(2, 1)
    let cell = m.col(1).row(2);
    assert_eq!(cell.mm(&m.row(0)).to_rows(), [[8, 16, 24]]);
}

/// A view keeps its buffer alive after the parent is dropped.
#[test]
fn view_outlives_temporary_parent() {
    let mut r = Matrix::from_rows([[1, 2], [3, 4]]).row(1);
    assert!(r.is_view());
    assert_eq!(r.to_rows(), [[3, 4]]);
    r.set(0, 0, 30);
    assert_eq!(r.get_flat(0), 30);
}

/// `assign` copies a transposed column into a row of the same matrix.
#[test]
fn assigning_a_column_into_a_row_view() {
    let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    let col = m.col(0).transpose();
    let mut row = m.row(0);
    row.assign(&col);
    assert_eq!(m.to_rows(), [[1, 4, 7], [4, 5, 6], [7, 8, 9]]);
}

/// Arithmetic on views allocates a fresh buffer.
#[test]
fn arithmetic_on_views_yields_owned_results() {
    let m = Matrix::from_rows([[1, 2], [3, 4]]);
    let sum = &m.row(0) + &m.row(1);
    assert!(!sum.is_view());
    assert!(!sum.shares_buffer(&m));
    assert_eq!(sum.to_rows(), [[4, 6]]);
}

/// `matvec` equals `mm` against the vector as a column.
#[test]
fn matvec_agrees_with_mm_on_a_column() {
    let a = Matrix::from_rows([[2.0, 0.0, 1.0], [-1.0, 3.0, 0.5]]);
    let x = Vector::new([1.0, 2.0, 4.0]);
    let via_mm = a.mm(&ColVec::from(x));
    assert_eq!(a.matvec(&x), Vector::from(&via_mm));
}

/// Row-major construction rejects a slice of the wrong length.
#[test]
fn row_major_construction_checks_length() {
    let err = Matrix::<i32, 2, 2>::from_row_major(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, LinalgError::DimensionMismatch { expected: 4, found: 3 }));
}

/// Comparisons on matrices return same-shape boolean masks.
#[test]
fn comparison_masks_on_matrices() {
    let a = Matrix::from_rows([[1, 5], [3, 2]]);
    let b = Matrix::splat(3);
    assert!(a.eq_elem(&a).all());
    assert_eq!(a.gt_elem(&b).count(), 1);
    assert_eq!(a.le_elem(&b).to_rows(), [[true, false], [true, true]]);
}
