//! Floating point helpers shared by the unit tests.

const TOLERANCE: f64 = 1e-9;

/// Asserts that `got` and `expected` agree up to a relative tolerance.
#[track_caller]
pub fn assert_close(got: f64, expected: f64) {
    let scale = expected.abs().max(1.);
    assert!(
        (got - expected).abs() <= TOLERANCE * scale,
        "got {got}, expected {expected}"
    );
}

/// Element-wise [`assert_close`].
#[track_caller]
pub fn assert_all_close(got: &[f64], expected: &[f64]) {
    assert_eq!(got.len(), expected.len(), "length mismatch");
    got.iter()
        .zip(expected)
        .for_each(|(&g, &e)| assert_close(g, e));
}
