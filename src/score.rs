//! Per-candidate scoring under the active criterion.

use crate::cholesky::ActiveFactor;
use crate::hyperparams::GpHyperparams;
use crate::kernel::kernel;
use crate::pool::CandidatePool;
use crate::types::SelectionCriterion;

/// Keeps the level-set score finite when the posterior mean sits exactly
/// on the decision level.
const LEVEL_SET_EPS: f64 = 1e-8;

/// A criterion with the level-set decision level pinned to a number.
#[derive(Clone, Copy, Debug)]
pub(crate) enum ResolvedCriterion {
    Entropy,
    LevelSet { level: f64 },
}

impl ResolvedCriterion {
    /// Resolves the public criterion against the pool: an absent level-set
    /// level becomes the midpoint of the observed range of target
    /// component 0.
    pub(crate) fn resolve(criterion: SelectionCriterion, pool: &CandidatePool<'_>) -> Self {
        match criterion {
            SelectionCriterion::Entropy => Self::Entropy,
            SelectionCriterion::LevelSet { level: Some(level) } => Self::LevelSet { level },
            SelectionCriterion::LevelSet { level: None } => {
                let mut lo = f64::INFINITY;
                let mut hi = f64::NEG_INFINITY;
                for i in 0..pool.len() {
                    let y = pool.target(i)[0];
                    lo = lo.min(y);
                    hi = hi.max(y);
                }
                Self::LevelSet {
                    level: 0.5 * (lo + hi),
                }
            }
        }
    }
}

/// Scores unselected candidates against the current active set.
///
/// Both criteria share one primitive: solve `L·z = kx` by forward
/// substitution, giving the posterior predictive variance
/// `k(x, x) − ‖z‖²`. The level-set criterion additionally reads the
/// posterior mean as `z · c`, where `c = L⁻¹·y` is maintained by the
/// caller one substitution step per selected point. This routine runs once
/// per unselected candidate per iteration, so the kernel-vector scratch is
/// reused across calls.
#[derive(Clone, Debug)]
pub(crate) struct ScoreEvaluator<'a> {
    pool: CandidatePool<'a>,
    hypers: &'a GpHyperparams,
    criterion: ResolvedCriterion,
    kx: Vec<f64>,
}

impl<'a> ScoreEvaluator<'a> {
    pub(crate) fn new(
        pool: CandidatePool<'a>,
        hypers: &'a GpHyperparams,
        criterion: ResolvedCriterion,
        capacity: usize,
    ) -> Self {
        Self {
            pool,
            hypers,
            criterion,
            kx: Vec::with_capacity(capacity),
        }
    }

    /// Scores `candidate` given the factor over `selected` and the mean
    /// weights `c = L⁻¹·y`.
    ///
    /// With an empty active set this reduces to the prior: variance
    /// `k(x, x)` and mean zero.
    pub(crate) fn score(
        &mut self,
        factor: &ActiveFactor,
        weights: &[f64],
        selected: &[usize],
        candidate: usize,
    ) -> f64 {
        debug_assert_eq!(factor.len(), selected.len());

        let x = self.pool.input(candidate);
        self.kx.clear();
        for &s in selected {
            self.kx.push(kernel(x, self.pool.input(s), self.hypers));
        }
        factor.forward_solve(&mut self.kx);

        let k_self = kernel(x, x, self.hypers);
        let explained: f64 = self.kx.iter().map(|&z| z * z).sum();
        // The clamp only guards the score against roundoff; degeneracy is
        // caught in the factor extension, not here.
        let variance = (k_self - explained).max(0.0);

        match self.criterion {
            ResolvedCriterion::Entropy => variance,
            ResolvedCriterion::LevelSet { level } => {
                let mean: f64 = self.kx.iter().zip(weights).map(|(&z, &c)| z * c).sum();
                variance.sqrt() / ((mean - level).abs() + LEVEL_SET_EPS)
            }
        }
    }
}
