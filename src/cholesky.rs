//! Incrementally extended Cholesky factor of the active covariance submatrix.

use nalgebra::DMatrix;

use crate::error::{Error, Result};

/// Relative floor on the new diagonal term. A residual at or below
/// `PD_FLOOR · |k(x, x)|` means the extended submatrix is not positive
/// definite within working precision.
const PD_FLOOR: f64 = 1e-12;

/// Lower-triangular factor `L` with `L·Lᵀ` equal to the covariance matrix
/// restricted to the currently selected points.
///
/// The factor is only ever grown: adding a point appends one row via
/// forward substitution (O(k²)) instead of re-factorizing the whole
/// submatrix (O(k³)). Storage is preallocated to `capacity × capacity`,
/// with the leading `len × len` lower triangle valid; the factor is never
/// stale with respect to the active set.
#[derive(Clone, Debug)]
pub(crate) struct ActiveFactor {
    l: DMatrix<f64>,
    len: usize,
}

impl ActiveFactor {
    /// Creates an empty factor able to hold `capacity` points.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            l: DMatrix::zeros(capacity, capacity),
            len: 0,
        }
    }

    /// Number of points currently folded into the factor.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Entry `L[i][j]` of the factor (`j ≤ i < len`).
    pub(crate) fn entry(&self, i: usize, j: usize) -> f64 {
        debug_assert!(j <= i && i < self.len);
        self.l[(i, j)]
    }

    /// Solves `L·z = rhs` in place by forward substitution.
    ///
    /// `rhs` must hold exactly `len` entries; on return it contains `z`.
    /// This is the shared primitive behind posterior variance, posterior
    /// mean, and the extension row — covariance inverses are never formed
    /// explicitly.
    pub(crate) fn forward_solve(&self, rhs: &mut [f64]) {
        debug_assert_eq!(rhs.len(), self.len);
        for i in 0..self.len {
            let mut acc = rhs[i];
            for j in 0..i {
                acc -= self.l[(i, j)] * rhs[j];
            }
            rhs[i] = acc / self.l[(i, i)];
        }
    }

    /// Folds a new point into the factor.
    ///
    /// `cross` holds the covariances between the new point and each already
    /// selected point, in selection order; it is consumed as scratch.
    /// `self_cov` is `k(x, x)` for the new point, and `index` is the pool
    /// index reported on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPositiveDefinite`] when the updated diagonal
    /// term is non-positive within the numerical floor — the extended
    /// covariance submatrix is degenerate and must not be clamped.
    pub(crate) fn extend(&mut self, cross: &mut [f64], self_cov: f64, index: usize) -> Result<()> {
        let n = self.len;
        debug_assert_eq!(cross.len(), n);
        debug_assert!(n < self.l.nrows(), "factor capacity exceeded");

        // New row of the factor: solve L·row = cross.
        self.forward_solve(cross);

        let row_norm_sq: f64 = cross.iter().map(|&z| z * z).sum();
        let residual = self_cov - row_norm_sq;
        let floor = PD_FLOOR * self_cov.abs().max(f64::MIN_POSITIVE);
        if !residual.is_finite() || residual <= floor {
            return Err(Error::NotPositiveDefinite { index });
        }

        for (j, &z) in cross.iter().enumerate() {
            self.l[(n, j)] = z;
        }
        self.l[(n, n)] = residual.sqrt();
        self.len = n + 1;
        Ok(())
    }
}
