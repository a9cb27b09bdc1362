//! Greedy active-subset selection.
//!
//! The selector walks the candidate pool one pick at a time: every
//! unselected point is scored under the configured criterion, the argmax
//! wins (ties broken toward the lowest pool index), and the winner is
//! folded into the incrementally maintained Cholesky factor of the active
//! covariance. The loop stops when the active set reaches `max_size`, when
//! the best remaining score drops below `tolerance`, or when no scoreable
//! candidate remains.
//!
//! # Algorithm overview
//!
//! 1. **Validate** — subset size, tolerance, kernel-parameter layout
//!    (buffer consistency is enforced by [`CandidatePool`] construction).
//! 2. **Score** — posterior predictive variance (entropy) or
//!    boundary proximity (level set) for every unselected candidate,
//!    computed by forward substitution against the current factor.
//! 3. **Extend** — the winner's cross-covariance row is substituted into
//!    the factor in O(k²); a non-positive diagonal aborts the call with
//!    [`Error::NotPositiveDefinite`].
//!
//! Greedy variance maximization exploits submodularity: each winner's
//! score is no larger than the previous one, so `tolerance` doubles as a
//! diminishing-returns cutoff.
//!
//! # Configuration
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `criterion` | `Entropy` | Scoring criterion for each greedy step |
//! | `tolerance` | 0.0 | Early-stop threshold on the best remaining score |
//!
//! # Examples
//!
//! ```
//! use active_subset::{CandidatePool, GpHyperparams, SubsetSelector};
//!
//! let inputs = [-5.0, -2.0, 0.0, 2.0, 5.0];
//! let targets = [25.0, 4.0, 0.0, 4.0, 25.0];
//! let pool = CandidatePool::new(&inputs, &targets, 1, 1).unwrap();
//! let hypers = GpHyperparams::isotropic(1.0, 1.0);
//!
//! let selection = SubsetSelector::builder(3)
//!     .tolerance(0.01)
//!     .build()
//!     .select(&pool, &hypers)
//!     .unwrap();
//! assert_eq!(selection.len(), 3);
//! ```

use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cholesky::ActiveFactor;
use crate::error::{Error, Result};
use crate::hyperparams::GpHyperparams;
use crate::kernel::kernel;
use crate::pool::CandidatePool;
use crate::score::{ResolvedCriterion, ScoreEvaluator};
use crate::types::{SelectionCriterion, StopReason};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Greedy selector of a bounded-size active subset for GP conditioning.
///
/// Each call is self-contained: the active set, the covariance factor, and
/// all scoring state are created fresh and discarded when the call
/// returns. The selector itself is plain configuration and can be reused
/// across pools and hyperparameters.
///
/// # Examples
///
/// ```
/// use active_subset::{
///     CandidatePool, GpHyperparams, SelectionCriterion, SubsetSelector,
/// };
///
/// let inputs = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
/// let targets = [0.2, 0.8, -0.4];
/// let pool = CandidatePool::new(&inputs, &targets, 2, 1).unwrap();
/// let hypers = GpHyperparams::new(1.0, vec![0.5, 0.5]);
///
/// // Entropy criterion with defaults
/// let selection = SubsetSelector::new(2).select(&pool, &hypers).unwrap();
/// assert_eq!(selection.len(), 2);
///
/// // Level-set criterion with an explicit decision level
/// let selector = SubsetSelector::builder(2)
///     .criterion(SelectionCriterion::LevelSet { level: Some(0.0) })
///     .build();
/// let selection = selector.select(&pool, &hypers).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct SubsetSelector {
    max_size: usize,
    criterion: SelectionCriterion,
    tolerance: f64,
}

impl SubsetSelector {
    /// Creates a selector with the entropy criterion and zero tolerance.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            criterion: SelectionCriterion::Entropy,
            tolerance: 0.0,
        }
    }

    /// Creates a builder for configuring a `SubsetSelector`.
    #[must_use]
    pub fn builder(max_size: usize) -> SubsetSelectorBuilder {
        SubsetSelectorBuilder::new(max_size)
    }

    /// Selects an active subset from `pool` under `hypers`.
    ///
    /// Early termination via the tolerance is a success with fewer than
    /// `max_size` points; see [`Selection::stop_reason`].
    ///
    /// # Errors
    ///
    /// Validation failures ([`Error::InvalidMaxSize`],
    /// [`Error::InvalidTolerance`], [`Error::KernelParamMismatch`]) and
    /// numerical failure ([`Error::NotPositiveDefinite`]) abort the call;
    /// no partial result is returned.
    pub fn select(
        &self,
        pool: &CandidatePool<'_>,
        hypers: &GpHyperparams,
    ) -> Result<Selection> {
        self.validate(pool, hypers)?;

        let capacity = self.max_size.min(pool.len());
        let criterion = ResolvedCriterion::resolve(self.criterion, pool);
        let mut factor = ActiveFactor::with_capacity(capacity);
        let mut evaluator = ScoreEvaluator::new(*pool, hypers, criterion, capacity);
        let mut picked = vec![false; pool.len()];
        let mut selected: Vec<usize> = Vec::with_capacity(capacity);
        let mut scores: Vec<f64> = Vec::with_capacity(capacity);
        // c = L⁻¹·y over target component 0, grown one substitution step
        // per selected point; read by the level-set posterior mean.
        let mut weights: Vec<f64> = Vec::with_capacity(capacity);

        trace_info!(
            max_size = self.max_size,
            num_points = pool.len(),
            "selection started"
        );

        let stop = loop {
            if selected.len() == self.max_size {
                break StopReason::CapacityReached;
            }

            let best = best_candidate(&mut evaluator, &factor, &weights, &selected, &picked);
            let Some((index, score)) = best else {
                break StopReason::PoolExhausted;
            };
            if score < self.tolerance {
                break StopReason::BelowTolerance;
            }

            let x = pool.input(index);
            let mut cross: Vec<f64> = selected
                .iter()
                .map(|&s| kernel(x, pool.input(s), hypers))
                .collect();
            factor.extend(&mut cross, kernel(x, x, hypers), index)?;

            let row = factor.len() - 1;
            let mut acc = pool.target(index)[0];
            for (j, &c) in weights.iter().enumerate() {
                acc -= factor.entry(row, j) * c;
            }
            weights.push(acc / factor.entry(row, row));

            picked[index] = true;
            selected.push(index);
            scores.push(score);
            trace_debug!(index, score, round = selected.len(), "candidate selected");
        };

        trace_info!(selected = selected.len(), reason = ?stop, "selection finished");

        Ok(Selection {
            indices: selected,
            scores,
            stop,
        })
    }

    /// Selects an active subset and writes the selected points' input and
    /// target vectors into caller-provided buffers, in selection order.
    ///
    /// The buffers must hold at least `max_size × input_dim` and
    /// `max_size × target_dim` scalars; entries past the number of points
    /// actually selected are left untouched.
    ///
    /// # Errors
    ///
    /// [`Error::BufferSizeMismatch`] for undersized output buffers, plus
    /// everything [`select`](Self::select) returns. On error the buffer
    /// contents are unspecified.
    pub fn select_into(
        &self,
        pool: &CandidatePool<'_>,
        hypers: &GpHyperparams,
        active_inputs: &mut [f64],
        active_targets: &mut [f64],
    ) -> Result<Selection> {
        let input_dim = pool.input_dim();
        let target_dim = pool.target_dim();
        if active_inputs.len() < self.max_size * input_dim {
            return Err(Error::BufferSizeMismatch {
                buffer: "active_inputs",
                expected: self.max_size * input_dim,
                got: active_inputs.len(),
            });
        }
        if active_targets.len() < self.max_size * target_dim {
            return Err(Error::BufferSizeMismatch {
                buffer: "active_targets",
                expected: self.max_size * target_dim,
                got: active_targets.len(),
            });
        }

        let selection = self.select(pool, hypers)?;
        for (slot, &index) in selection.indices.iter().enumerate() {
            active_inputs[slot * input_dim..(slot + 1) * input_dim]
                .copy_from_slice(pool.input(index));
            active_targets[slot * target_dim..(slot + 1) * target_dim]
                .copy_from_slice(pool.target(index));
        }
        Ok(selection)
    }

    fn validate(&self, pool: &CandidatePool<'_>, hypers: &GpHyperparams) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::InvalidMaxSize);
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        hypers.validate(pool.input_dim())
    }
}

/// Builder for configuring a [`SubsetSelector`].
///
/// # Examples
///
/// ```
/// use active_subset::{SelectionCriterion, SubsetSelector};
///
/// let selector = SubsetSelector::builder(32)
///     .criterion(SelectionCriterion::LevelSet { level: None })
///     .tolerance(1e-3)
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct SubsetSelectorBuilder {
    max_size: usize,
    criterion: SelectionCriterion,
    tolerance: f64,
}

impl SubsetSelectorBuilder {
    /// Creates a builder with default settings for the given subset size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            criterion: SelectionCriterion::Entropy,
            tolerance: 0.0,
        }
    }

    /// Sets the scoring criterion.
    ///
    /// Default: [`SelectionCriterion::Entropy`].
    #[must_use]
    pub fn criterion(mut self, criterion: SelectionCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Sets the early-stop threshold on the best remaining score.
    ///
    /// Selection halts successfully once every unselected candidate scores
    /// below this value.
    ///
    /// Default: 0.0 (never stop early).
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builds the configured [`SubsetSelector`].
    #[must_use]
    pub fn build(self) -> SubsetSelector {
        SubsetSelector {
            max_size: self.max_size,
            criterion: self.criterion,
            tolerance: self.tolerance,
        }
    }
}

/// The result of a successful selection.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selection {
    indices: Vec<usize>,
    scores: Vec<f64>,
    stop: StopReason,
}

impl Selection {
    /// Number of points selected (at most the configured `max_size`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if nothing was selected (every candidate scored
    /// below the tolerance from the start).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected pool indices, in selection order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The winning score at each pick, in selection order.
    ///
    /// Under the entropy criterion this sequence is non-increasing
    /// (submodularity of GP variance reduction).
    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Why the selection stopped.
    #[must_use]
    pub fn stop_reason(&self) -> StopReason {
        self.stop
    }
}

// ---------------------------------------------------------------------------
// Argmax over unselected candidates
// ---------------------------------------------------------------------------

/// Picks the challenger when it scores strictly higher, or on an exact tie
/// with a lower index; incomparable (NaN) challengers lose.
fn merge_best(
    best: Option<(usize, f64)>,
    challenger: Option<(usize, f64)>,
) -> Option<(usize, f64)> {
    match (best, challenger) {
        (None, c) => c,
        (b, None) => b,
        (Some((bi, bs)), Some((ci, cs))) => match cs.partial_cmp(&bs) {
            Some(Ordering::Greater) => Some((ci, cs)),
            Some(Ordering::Equal) if ci < bi => Some((ci, cs)),
            _ => Some((bi, bs)),
        },
    }
}

#[cfg(not(feature = "parallel"))]
fn best_candidate(
    evaluator: &mut ScoreEvaluator<'_>,
    factor: &ActiveFactor,
    weights: &[f64],
    selected: &[usize],
    picked: &[bool],
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &taken) in picked.iter().enumerate() {
        if taken {
            continue;
        }
        let score = evaluator.score(factor, weights, selected, i);
        let challenger = (score > f64::NEG_INFINITY).then_some((i, score));
        best = merge_best(best, challenger);
    }
    best
}

/// Parallel scoring fan-out. Scoring is read-only with respect to the
/// factor, so candidates are scored concurrently with per-thread scratch;
/// the reduction uses the same ordering predicate as the sequential path,
/// so the selected index is identical either way.
#[cfg(feature = "parallel")]
fn best_candidate(
    evaluator: &mut ScoreEvaluator<'_>,
    factor: &ActiveFactor,
    weights: &[f64],
    selected: &[usize],
    picked: &[bool],
) -> Option<(usize, f64)> {
    let evaluator = &*evaluator;
    (0..picked.len())
        .into_par_iter()
        .fold(
            || (evaluator.clone(), None::<(usize, f64)>),
            |(mut ev, best), i| {
                if picked[i] {
                    return (ev, best);
                }
                let score = ev.score(factor, weights, selected, i);
                let challenger = (score > f64::NEG_INFINITY).then_some((i, score));
                (ev, merge_best(best, challenger))
            },
        )
        .map(|(_, best)| best)
        .reduce(|| None, merge_best)
}
