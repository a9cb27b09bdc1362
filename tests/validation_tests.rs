use active_subset::prelude::*;

#[test]
fn zero_max_size_is_rejected() {
    let inputs = [0.0, 1.0];
    let targets = [1.0, 2.0];
    let pool = CandidatePool::new(&inputs, &targets, 1, 1).unwrap();
    let hypers = GpHyperparams::isotropic(1.0, 1.0);

    let err = SubsetSelector::new(0).select(&pool, &hypers).unwrap_err();
    assert!(matches!(err, Error::InvalidMaxSize));
}

#[test]
fn negative_and_non_finite_tolerances_are_rejected() {
    let inputs = [0.0, 1.0];
    let targets = [1.0, 2.0];
    let pool = CandidatePool::new(&inputs, &targets, 1, 1).unwrap();
    let hypers = GpHyperparams::isotropic(1.0, 1.0);

    for bad in [-0.5, f64::NAN, f64::INFINITY] {
        let err = SubsetSelector::builder(1)
            .tolerance(bad)
            .build()
            .select(&pool, &hypers)
            .unwrap_err();
        assert!(
            matches!(err, Error::InvalidTolerance(_)),
            "tolerance {bad} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn kernel_param_layout_is_checked_against_input_dim() {
    // 2-D inputs with three length scales: neither isotropic nor ARD.
    let inputs = [0.0, 0.0, 1.0, 1.0];
    let targets = [1.0, 2.0];
    let pool = CandidatePool::new(&inputs, &targets, 2, 1).unwrap();
    let hypers = GpHyperparams::new(1.0, vec![1.0, 1.0, 1.0]);

    let err = SubsetSelector::new(1).select(&pool, &hypers).unwrap_err();
    assert!(matches!(
        err,
        Error::KernelParamMismatch { input_dim: 2, got: 3 }
    ));
}

#[test]
fn pool_construction_rejects_inconsistent_buffers() {
    // Input buffer not divisible by the input dimension.
    assert!(matches!(
        CandidatePool::new(&[0.0, 1.0, 2.0], &[1.0], 2, 1),
        Err(Error::BufferSizeMismatch { buffer: "inputs", .. })
    ));

    // Target buffer disagreeing with the derived point count.
    assert!(matches!(
        CandidatePool::new(&[0.0, 1.0, 2.0, 3.0], &[1.0], 2, 1),
        Err(Error::BufferSizeMismatch { buffer: "targets", expected: 2, got: 1 })
    ));
}

#[test]
fn undersized_output_buffers_are_rejected_before_selection() {
    let inputs = [0.0, 1.0, 2.0];
    let targets = [1.0, 2.0, 3.0];
    let pool = CandidatePool::new(&inputs, &targets, 1, 1).unwrap();
    let hypers = GpHyperparams::isotropic(1.0, 1.0);

    let mut short_inputs = [0.0; 2];
    let mut targets_buf = [0.0; 3];
    let err = SubsetSelector::new(3)
        .select_into(&pool, &hypers, &mut short_inputs, &mut targets_buf)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::BufferSizeMismatch { buffer: "active_inputs", expected: 3, got: 2 }
    ));

    let mut inputs_buf = [0.0; 3];
    let mut short_targets = [0.0; 1];
    let err = SubsetSelector::new(3)
        .select_into(&pool, &hypers, &mut inputs_buf, &mut short_targets)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::BufferSizeMismatch { buffer: "active_targets", expected: 3, got: 1 }
    ));
}

#[test]
fn validation_errors_have_readable_messages() {
    let err = CandidatePool::new(&[], &[], 1, 1).unwrap_err();
    assert_eq!(err.to_string(), "candidate pool cannot be empty");

    let err = Error::NotPositiveDefinite { index: 7 };
    assert_eq!(
        err.to_string(),
        "covariance not positive definite when adding candidate 7"
    );
}
