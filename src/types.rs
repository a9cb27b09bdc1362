//! Core types for the active-subset library.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The criterion used to score unselected candidates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectionCriterion {
    /// Maximize information gain: each step picks the candidate with the
    /// highest posterior predictive variance under the current active set.
    Entropy,
    /// Concentrate samples near a decision boundary: each step picks the
    /// candidate closest to the level (relative to its remaining
    /// uncertainty) rather than the most uncertain one.
    LevelSet {
        /// The decision level the posterior mean is compared against.
        /// `None` derives the midpoint of the observed range of target
        /// component 0 at selection time.
        level: Option<f64>,
    },
}

/// Why a successful selection stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopReason {
    /// The active set reached `max_size`.
    CapacityReached,
    /// The best remaining score fell below the configured tolerance.
    BelowTolerance,
    /// No scoreable unselected candidates remained.
    PoolExhausted,
}
