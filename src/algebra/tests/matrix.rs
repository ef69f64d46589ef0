#![allow(non_snake_case)]
use crate::algebra::*;

// deterministic, non-symmetric fill used by the property checks below
fn test_matrix(m: usize, n: usize) -> Matrix<f64> {
    let data: Vec<f64> = (0..m * n)
        .map(|k| ((k * 7 + 3) % 11) as f64 - 5.0 + 0.25 * (k % 3) as f64)
        .collect();
    Matrix::new_from_slice((m, n), &data).unwrap()
}

#[test]
fn test_transpose_involution() {
    for &(m, n) in &[(1, 1), (1, 5), (5, 1), (3, 4), (6, 6), (9, 2)] {
        let A = test_matrix(m, n);
        let mut At = Matrix::zeros((n, m));
        let mut Att = Matrix::zeros((1, 1));

        A.transpose(&mut At);
        At.transpose(&mut Att);

        assert_eq!(At.size(), (n, m));
        for i in 0..m {
            for j in 0..n {
                assert_eq!(At[(j, i)], A[(i, j)]);
            }
        }
        assert_eq!(Att, A);
    }
}

#[test]
fn test_multiply_by_identity() {
    for &(m, n) in &[(1, 1), (2, 7), (7, 2), (5, 5)] {
        let A = test_matrix(m, n);
        let mut C = Matrix::zeros((1, 1));

        A.multiply(&Matrix::identity(n), &mut C).unwrap();
        assert_eq!(C.size(), (m, n));
        assert!(C.data().norm_inf_diff(A.data()) < 1e-14);

        Matrix::identity(m).multiply(&A, &mut C).unwrap();
        assert!(C.data().norm_inf_diff(A.data()) < 1e-14);
    }
}

#[test]
fn test_multiply_associates_with_transpose() {
    // (A*B)' == B'*A'
    let A = test_matrix(3, 5);
    let B = test_matrix(5, 4);

    let mut AB = Matrix::zeros((3, 4));
    A.multiply(&B, &mut AB).unwrap();
    let mut ABt = Matrix::zeros((4, 3));
    AB.transpose(&mut ABt);

    let (mut At, mut Bt) = (Matrix::zeros((5, 3)), Matrix::zeros((4, 5)));
    A.transpose(&mut At);
    B.transpose(&mut Bt);
    let mut BtAt = Matrix::zeros((4, 3));
    Bt.multiply(&At, &mut BtAt).unwrap();

    assert!(ABt.data().norm_inf_diff(BtAt.data()) < 1e-12);
}

#[test]
fn test_borrowed_multiply() {
    let adata = [1., 2., 3., 4., 5., 6.];
    let bdata = [1., 0., 0., 1., 1., 1.];
    let A = BorrowedMatrix::from_slice(&adata, 2, 3).unwrap();
    let B = BorrowedMatrix::from_slice(&bdata, 3, 2).unwrap();

    let mut C = Matrix::zeros((2, 2));
    A.multiply(&B, &mut C).unwrap();
    assert_eq!(C, Matrix::from(&[[4., 5.], [10., 11.]]));

    // owned times borrowed
    let mut D = Matrix::zeros((2, 2));
    C.multiply(&BorrowedMatrix::from_slice(&[1., 0., 0., 1.], 2, 2).unwrap(), &mut D)
        .unwrap();
    assert_eq!(D, C);

    let mut At = Matrix::zeros((3, 2));
    A.transpose(&mut At);
    assert_eq!(At, Matrix::from(&[[1., 4.], [2., 5.], [3., 6.]]));
}

#[test]
fn test_clear_borrowed() {
    let mut data = [1., 2., 3., 4.];
    let mut A = BorrowedMatrixMut::from_slice_mut(&mut data, 2, 2).unwrap();
    A.clear();
    assert_eq!(data, [0.; 4]);
}
