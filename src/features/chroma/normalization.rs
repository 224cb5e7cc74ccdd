//! Chroma normalization

use super::NUM_PITCH_CLASSES;

fn peak_abs(chroma: &[f32; NUM_PITCH_CLASSES]) -> f32 {
    chroma.iter().fold(0.0f32, |m, v| m.max(v.abs()))
}

/// Euclidean length of a chroma vector
///
/// Bins are divided by the peak before squaring, so any finite input has a
/// finite sum of squares.
pub fn l2_norm(chroma: &[f32; NUM_PITCH_CLASSES]) -> f32 {
    let peak = peak_abs(chroma);
    if peak <= 0.0 || !peak.is_finite() {
        return peak;
    }
    peak * chroma.iter().map(|v| (v / peak).powi(2)).sum::<f32>().sqrt()
}

/// Scale a chroma vector to unit Euclidean length
///
/// The vector is first scaled by its peak bin, then by its length, so
/// energies near `f32::MAX` keep their direction. A zero vector is returned
/// unchanged rather than divided by zero.
///
/// # Arguments
///
/// * `chroma` - 12-element chroma vector
///
/// # Returns
///
/// L2-normalized chroma vector
pub fn l2_normalize(chroma: &[f32; NUM_PITCH_CLASSES]) -> [f32; NUM_PITCH_CLASSES] {
    let peak = peak_abs(chroma);
    if peak <= 0.0 || !peak.is_finite() {
        return *chroma;
    }

    let mut out = chroma.map(|v| v / peak);
    // At least one bin is now +-1, so the length is in [1, sqrt(12)]
    let magnitude = out.iter().map(|v| v * v).sum::<f32>().sqrt();
    for v in out.iter_mut() {
        *v /= magnitude;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_normalize_basic() {
        let mut chroma = [0.0f32; 12];
        chroma[0] = 2.0;
        let n = l2_normalize(&chroma);
        assert_eq!(n[0], 1.0);
        assert!(n[1..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_l2_normalize_zero() {
        let chroma = [0.0f32; 12];
        assert_eq!(l2_normalize(&chroma), chroma);
    }

    #[test]
    fn test_l2_normalize_preserves_direction() {
        let chroma = [1.0f32; 12];
        let n = l2_normalize(&chroma);
        let expected = 1.0 / 12.0f32.sqrt();
        assert!(n.iter().all(|&v| (v - expected).abs() < 1e-6));
    }

    #[test]
    fn test_l2_normalize_large_values() {
        let mut chroma = [0.0f32; 12];
        chroma[0] = 2e19;
        chroma[4] = 1.6e19;
        chroma[7] = 1.2e19;
        let n = l2_normalize(&chroma);
        let length = n.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((length - 1.0).abs() < 1e-6);
        assert!((n[4] / n[0] - 0.8).abs() < 1e-6);

        let huge = l2_normalize(&[f32::MAX; 12]);
        let expected = 1.0 / 12.0f32.sqrt();
        assert!(huge.iter().all(|&v| (v - expected).abs() < 1e-6));
    }

    #[test]
    fn test_l2_norm() {
        let mut chroma = [0.0f32; 12];
        chroma[0] = 3.0;
        chroma[4] = 4.0;
        assert!((l2_norm(&chroma) - 5.0).abs() < 1e-6);
        assert_eq!(l2_norm(&[0.0; 12]), 0.0);

        chroma[0] = 3e30;
        chroma[4] = 4e30;
        assert!((l2_norm(&chroma) / 5e30 - 1.0).abs() < 1e-6);
    }
}
