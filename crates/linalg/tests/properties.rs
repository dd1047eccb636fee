use linalg::{ErrorKind, Matrix};
use proptest::prelude::*;
use quickcheck::TestResult;

fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-10.0f32..10.0, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
}

fn max_abs_diff(a: &Matrix, b: &Matrix) -> f32 {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

fn bits(m: &Matrix) -> Vec<u32> {
    m.as_slice().iter().map(|v| v.to_bits()).collect()
}

proptest! {
    #[test]
    fn addition_commutes_and_associates(
        (a, b, c) in (1usize..6, 1usize..6)
            .prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c), matrix(r, c)))
    ) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        let left = a.add(&b).unwrap().add(&c).unwrap();
        let right = a.add(&b.add(&c).unwrap()).unwrap();
        prop_assert!(max_abs_diff(&left, &right) < 1e-4);
    }

    #[test]
    fn matmul_associates(
        (a, b, c) in (1usize..5, 1usize..5, 1usize..5, 1usize..5)
            .prop_flat_map(|(m, n, p, q)| (matrix(m, n), matrix(n, p), matrix(p, q)))
    ) {
        let left = a.matmul(&b).unwrap().matmul(&c).unwrap();
        let right = a.matmul(&b.matmul(&c).unwrap()).unwrap();
        prop_assert_eq!(left.shape(), (a.rows(), c.cols()));
        let tol = 1e-5 * (1.0 + a.norm() * b.norm() * c.norm());
        prop_assert!(max_abs_diff(&left, &right) <= tol);
    }

    #[test]
    fn transpose_round_trips(m in (1usize..7, 1usize..7).prop_flat_map(|(r, c)| matrix(r, c))) {
        let mut t = m.clone();
        t.transpose();
        prop_assert_eq!(t.shape(), (m.cols(), m.rows()));
        for r in 0..m.rows() {
            for c in 0..m.cols() {
                prop_assert_eq!(t.get(c, r).unwrap(), m.get(r, c).unwrap());
            }
        }
        t.transpose();
        prop_assert_eq!(t, m);
    }

    #[test]
    fn vectorize_preserves_linear_order(m in (1usize..7, 1usize..7).prop_flat_map(|(r, c)| matrix(r, c))) {
        let v = m.vectorized();
        prop_assert_eq!(v.shape(), (m.rows() * m.cols(), 1));
        prop_assert_eq!(v.as_slice(), m.as_slice());
    }

    #[test]
    fn argmax_is_first_maximum(data in prop::collection::vec(-3i8..3, 1..20)) {
        let values: Vec<f32> = data.iter().map(|&v| f32::from(v)).collect();
        let m = Matrix::from_vec(1, values.len(), values.clone()).unwrap();
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let first = values.iter().position(|&v| v == max).unwrap();
        prop_assert_eq!(m.argmax(), first);
    }

    #[test]
    fn out_of_range_is_reported(
        m in (1usize..6, 1usize..6).prop_flat_map(|(r, c)| matrix(r, c)),
        extra in 0usize..10,
    ) {
        let err = m.at(m.size() + extra).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::OutOfRange);
        prop_assert!(m.get(m.rows() + extra, 0).is_err());
        prop_assert!(m.get(0, m.cols() + extra).is_err());
    }

    #[test]
    fn rref_of_nonsingular_diagonal_is_identity(diag in prop::collection::vec(0.5f32..10.0, 1..6)) {
        let n = diag.len();
        let mut m = Matrix::new(n, n).unwrap();
        for (i, d) in diag.iter().enumerate() {
            m.set(i, i, *d).unwrap();
        }
        prop_assert_eq!(m.rref(), Matrix::identity(n).unwrap());
    }

    #[test]
    fn norm_matches_self_hadamard(m in (1usize..6, 1usize..6).prop_flat_map(|(r, c)| matrix(r, c))) {
        let squared = m.dot(&m).unwrap().sum();
        prop_assert!((m.norm() * m.norm() - squared).abs() <= 1e-3 * (1.0 + squared));
    }
}

#[test]
fn scalar_multiplication_is_order_independent() {
    fn prop(data: Vec<f32>, c: f32) -> TestResult {
        if data.is_empty() {
            return TestResult::discard();
        }
        let m = Matrix::from_vec(1, data.len(), data).unwrap();
        TestResult::from_bool(bits(&(&m * c)) == bits(&(c * &m)))
    }
    quickcheck::quickcheck(prop as fn(Vec<f32>, f32) -> TestResult);
}

#[test]
fn transpose_twice_restores_bits() {
    fn prop(data: Vec<f32>, cols: u8) -> TestResult {
        let cols = usize::from(cols % 4) + 1;
        let rows = data.len() / cols;
        if rows == 0 {
            return TestResult::discard();
        }
        let data: Vec<f32> = data.into_iter().take(rows * cols).collect();
        let m = Matrix::from_vec(rows, cols, data).unwrap();
        let mut t = m.clone();
        t.transpose().transpose();
        TestResult::from_bool(t.shape() == m.shape() && bits(&t) == bits(&m))
    }
    quickcheck::quickcheck(prop as fn(Vec<f32>, u8) -> TestResult);
}
