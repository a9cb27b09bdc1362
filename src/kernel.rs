//! Pairwise covariance evaluation.

use crate::hyperparams::GpHyperparams;

/// Squared-exponential kernel with isotropic or per-dimension length scales.
///
/// `k(a, b) = beta · exp(-½ Σ ((a_d - b_d) / l_d)²)`
/// where `l_d` is `cov[d]` when one scale per dimension is supplied, or
/// `cov[0]` for every dimension otherwise.
///
/// Pure and deterministic; `k(x, x) = beta`.
#[must_use]
pub fn kernel(a: &[f64], b: &[f64], hypers: &GpHyperparams) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    debug_assert!(hypers.cov.len() == 1 || hypers.cov.len() == a.len());

    let mut r_sq = 0.0;
    if hypers.cov.len() == 1 {
        let inv = 1.0 / hypers.cov[0];
        for i in 0..a.len() {
            let diff = (a[i] - b[i]) * inv;
            r_sq += diff * diff;
        }
    } else {
        for i in 0..a.len() {
            let diff = (a[i] - b[i]) / hypers.cov[i];
            r_sq += diff * diff;
        }
    }
    hypers.beta * (-0.5 * r_sq).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_covariance_is_beta() {
        let hypers = GpHyperparams::isotropic(2.5, 0.7);
        let x = [1.0, -3.0, 4.5];
        assert!((kernel(&x, &x, &hypers) - 2.5).abs() < 1e-15);
    }

    #[test]
    fn symmetric_and_decaying() {
        let hypers = GpHyperparams::isotropic(1.0, 1.0);
        let a = [0.0];
        let b = [1.0];
        let c = [3.0];

        let k_ab = kernel(&a, &b, &hypers);
        let k_ba = kernel(&b, &a, &hypers);
        let k_ac = kernel(&a, &c, &hypers);

        assert!((k_ab - k_ba).abs() < 1e-15, "kernel must be symmetric");
        assert!(
            k_ac < k_ab,
            "covariance should decay with distance: k_ac={k_ac}, k_ab={k_ab}"
        );
        assert!((k_ab - (-0.5f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn isotropic_matches_replicated_ard() {
        let iso = GpHyperparams::isotropic(1.3, 0.4);
        let ard = GpHyperparams::new(1.3, vec![0.4, 0.4, 0.4]);
        let a = [0.2, -1.0, 2.0];
        let b = [1.1, 0.5, 1.9];

        let diff = (kernel(&a, &b, &iso) - kernel(&a, &b, &ard)).abs();
        assert!(diff < 1e-15, "isotropic and replicated ARD diverge: {diff}");
    }

    #[test]
    fn ard_scales_weight_dimensions_independently() {
        // A huge length scale on the second dimension makes it irrelevant.
        let ard = GpHyperparams::new(1.0, vec![1.0, 1e12]);
        let a = [0.0, 0.0];
        let b = [1.0, 500.0];
        let reference = kernel(&[0.0], &[1.0], &GpHyperparams::isotropic(1.0, 1.0));

        let k = kernel(&a, &b, &ard);
        assert!((k - reference).abs() < 1e-12);
    }
}
