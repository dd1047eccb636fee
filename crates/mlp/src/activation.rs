use linalg::Matrix;

/// A pure, shape-preserving transform applied to a layer's affine output.
///
/// Implemented for every `Fn(&Matrix) -> Matrix`, so [`relu`], [`softmax`]
/// and closures can all be bound to a [`Dense`](crate::Dense) layer.
pub trait Activation: Send + Sync {
    /// Transform `input` into a new matrix of the same shape.
    fn activate(&self, input: &Matrix) -> Matrix;
}

impl<F> Activation for F
where
    F: Fn(&Matrix) -> Matrix + Send + Sync,
{
    fn activate(&self, input: &Matrix) -> Matrix {
        self(input)
    }
}

/// Rectified linear unit: keeps values `>= 0`, replaces everything else with 0.
pub fn relu(input: &Matrix) -> Matrix {
    let mut out = input.clone();
    for v in out.as_mut_slice() {
        *v = if *v >= 0.0 { *v } else { 0.0 };
    }
    out
}

/// Normalized exponential over all elements.
///
/// No max-subtraction is applied before `exp`, so large inputs overflow to
/// `inf` and the result turns into `NaN`.
pub fn softmax(input: &Matrix) -> Matrix {
    let mut exps = input.clone();
    for v in exps.as_mut_slice() {
        *v = v.exp();
    }
    let scalar = 1.0 / exps.sum();
    scalar * exps
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn column(values: &[f32]) -> Matrix {
        Matrix::from_vec(values.len(), 1, values.to_vec()).unwrap()
    }

    #[test]
    fn relu_clamps_negatives() {
        let out = relu(&Matrix::from_vec(2, 2, vec![-1.0, 0.0, 2.5, -0.1]).unwrap());
        assert_eq!(out.shape(), (2, 2));
        assert_eq!(out.as_slice(), &[0.0, 0.0, 2.5, 0.0]);
    }

    #[test]
    fn relu_maps_nan_to_zero() {
        assert_eq!(relu(&column(&[f32::NAN])).as_slice(), &[0.0]);
    }

    #[test]
    fn softmax_of_zeros_is_uniform() {
        let out = softmax(&Matrix::new(10, 1).unwrap());
        for &p in out.as_slice() {
            assert!((p - 0.1).abs() < 1e-7);
        }
    }

    #[test]
    fn softmax_keeps_shape_and_order() {
        let out = softmax(&Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap());
        assert_eq!(out.shape(), (1, 3));
        assert_eq!(out.argmax(), 2);
        assert!((out.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn softmax_overflows_without_shift() {
        let out = softmax(&column(&[100.0, 0.0]));
        assert!(out.as_slice().iter().any(|v| v.is_nan()));
    }

    #[test]
    fn closures_are_activations() {
        let double = |m: &Matrix| m.scale(2.0);
        let act: &dyn Activation = &double;
        assert_eq!(act.activate(&column(&[1.5])).as_slice(), &[3.0]);
    }

    proptest! {
        #[test]
        fn softmax_sums_to_one(values in prop::collection::vec(-20.0f32..20.0, 1..64)) {
            let out = softmax(&column(&values));
            prop_assert!((out.sum() - 1.0).abs() < 1e-4);
            prop_assert!(out.as_slice().iter().all(|&p| (0.0..=1.0).contains(&p)));
        }

        #[test]
        fn relu_is_idempotent(values in prop::collection::vec(-5.0f32..5.0, 1..32)) {
            let once = relu(&column(&values));
            prop_assert!(once.as_slice().iter().all(|&v| v >= 0.0));
            prop_assert_eq!(relu(&once), once);
        }
    }
}
