use rand::Rng;

/// Asserts two floats are equal within a tolerance (default `1e-9`).
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        assert_close!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() <= $tolerance,
            "assertion failed: `{} ≈ {}` (tolerance {})",
            left,
            right,
            $tolerance
        );
    }};
}

/// Random amounts with at most two decimal digits, in `[0, max)`.
pub fn random_amounts(count: usize, max: f64) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| (rng.gen_range(0.0..max) * 100.0).round() / 100.0)
        .collect()
}
