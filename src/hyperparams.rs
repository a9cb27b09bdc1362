//! Gaussian Process hyperparameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Pre-computed Gaussian Process hyperparameters.
///
/// Defines the pairwise covariance `k(a, b) = beta · f(cov, a, b)` used by
/// the selector. The values arrive already fitted — this library never
/// learns or calibrates them — and the struct is passed by shared reference
/// for every kernel evaluation in a call, never copied per candidate.
///
/// `cov` holds length scales for the squared-exponential kernel: a single
/// entry applies one isotropic scale to every input dimension, while
/// `input_dim` entries give each dimension its own scale (ARD). Any other
/// length is rejected at selection time.
///
/// # Examples
///
/// ```
/// use active_subset::GpHyperparams;
///
/// // One length scale shared across all input dimensions
/// let hypers = GpHyperparams::isotropic(1.0, 0.5);
///
/// // Per-dimension length scales for 3-D inputs
/// let hypers = GpHyperparams::new(2.0, vec![0.5, 0.5, 4.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpHyperparams {
    /// Overall covariance scale; `k(x, x) = beta` for the
    /// squared-exponential kernel.
    pub beta: f64,
    /// Kernel length scales: one entry (isotropic) or one per input
    /// dimension (ARD).
    pub cov: Vec<f64>,
}

impl GpHyperparams {
    /// Creates hyperparameters from a scale and a length-scale vector.
    #[must_use]
    pub fn new(beta: f64, cov: Vec<f64>) -> Self {
        Self { beta, cov }
    }

    /// Creates hyperparameters with a single isotropic length scale.
    #[must_use]
    pub fn isotropic(beta: f64, length_scale: f64) -> Self {
        Self {
            beta,
            cov: vec![length_scale],
        }
    }

    /// Checks that `cov` fits the isotropic or per-dimension layout for
    /// the given input dimension.
    pub(crate) fn validate(&self, input_dim: usize) -> Result<()> {
        if self.cov.len() == 1 || self.cov.len() == input_dim {
            Ok(())
        } else {
            Err(Error::KernelParamMismatch {
                input_dim,
                got: self.cov.len(),
            })
        }
    }
}
