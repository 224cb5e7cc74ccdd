//! Template similarity

/// Pearson correlation coefficient between two equal-length vectors
///
/// Mean-centered dot product over the root-sum-square of both centered
/// vectors. Returns 0.0 when either vector has zero variance (or the
/// lengths differ), so the result is never NaN. Clamped to [-1, 1].
///
/// The variance test is relative to each vector's own energy, so the result
/// does not depend on overall scale.
///
/// # Example
///
/// ```
/// use stratum_chords::features::chord::correlation::pearson_correlation;
///
/// let a = [1.0, 0.0, 0.5, 0.0];
/// assert!((pearson_correlation(&a, &a) - 1.0).abs() < 1e-6);
/// assert_eq!(pearson_correlation(&a, &[0.5; 4]), 0.0);
/// ```
pub fn pearson_correlation(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let n = a.len() as f32;
    let mean_a = a.iter().sum::<f32>() / n;
    let mean_b = b.iter().sum::<f32>() / n;

    let mut cov = 0.0f32;
    let mut var_a = 0.0f32;
    let mut var_b = 0.0f32;
    let mut energy_a = 0.0f32;
    let mut energy_b = 0.0f32;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
        energy_a += x * x;
        energy_b += y * y;
    }

    // Flat vectors leave only rounding residue in the centered sums
    if var_a <= f32::EPSILON * energy_a || var_b <= f32::EPSILON * energy_b {
        return 0.0;
    }

    let r = cov / (var_a.sqrt() * var_b.sqrt());
    if r.is_finite() {
        r.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
