#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Greedy active-subset selection for Gaussian Process conditioning.
//!
//! Conditioning a GP on all available data costs O(n³); this library picks
//! a bounded-size subset of the candidate pool that approximates the
//! information content of the whole, under fixed, pre-computed
//! hyperparameters. Repeated scoring stays tractable through an
//! incrementally extended Cholesky factor of the active covariance —
//! adding a point is O(k²), and no covariance matrix is ever inverted or
//! re-factorized.
//!
//! # Getting Started
//!
//! ```
//! use active_subset::prelude::*;
//!
//! // Five 1-D points with targets x²
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
//!
//! assert_eq!(selection.len(), 3);
//! println!("active subset: {:?}", selection.indices());
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`CandidatePool`] | Read-only view over the caller's row-major point buffers. |
//! | [`GpHyperparams`] | Fixed kernel scale and length scales (`beta`, `cov`). |
//! | [`SubsetSelector`] | Drives the greedy loop; configured via its builder. |
//! | [`SelectionCriterion`] | What each greedy step maximizes. |
//! | [`Selection`] | Selected indices, per-pick scores, and the stop reason. |
//!
//! # Criterion Guide
//!
//! | Criterion | Picks | Best for |
//! |-----------|-------|----------|
//! | [`SelectionCriterion::Entropy`] | Highest posterior predictive variance | Regression, general information coverage |
//! | [`SelectionCriterion::LevelSet`] | Highest `sigma / (\|mu − level\| + ε)` | Classification boundaries, implicit surfaces |
//!
//! The level-set decision level is explicit on the variant; leaving it
//! unset derives the midpoint of the observed target range.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public value types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) in the selection loop | off |
//! | `parallel` | Rayon fan-out of per-candidate scoring (identical results) | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod cholesky;
mod error;
mod hyperparams;
pub mod kernel;
mod pool;
mod score;
mod selector;
mod types;

pub use error::{Error, Result};
pub use hyperparams::GpHyperparams;
pub use pool::CandidatePool;
pub use selector::{Selection, SubsetSelector, SubsetSelectorBuilder};
pub use types::{SelectionCriterion, StopReason};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use active_subset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::hyperparams::GpHyperparams;
    pub use crate::pool::CandidatePool;
    pub use crate::selector::{Selection, SubsetSelector, SubsetSelectorBuilder};
    pub use crate::types::{SelectionCriterion, StopReason};
}
