//! Read-only view over the caller's candidate buffers.

use crate::error::{Error, Result};

/// The full set of candidate points, borrowed from the caller.
///
/// Both buffers are row-major (point-major): point `i` occupies
/// `inputs[i * input_dim .. (i + 1) * input_dim]` and
/// `targets[i * target_dim .. (i + 1) * target_dim]`. The number of points
/// is derived from the buffer lengths, so a dimensional mismatch is caught
/// at construction instead of by per-call index bookkeeping.
///
/// The pool is never mutated; it borrows the caller's data for the
/// duration of a selection call.
///
/// # Examples
///
/// ```
/// use active_subset::CandidatePool;
///
/// // Three 2-D points with scalar targets
/// let inputs = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
/// let targets = [0.5, -0.5, 1.5];
/// let pool = CandidatePool::new(&inputs, &targets, 2, 1).unwrap();
/// assert_eq!(pool.len(), 3);
/// assert_eq!(pool.input(1), &[1.0, 0.0]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CandidatePool<'a> {
    inputs: &'a [f64],
    targets: &'a [f64],
    input_dim: usize,
    target_dim: usize,
    num_points: usize,
}

impl<'a> CandidatePool<'a> {
    /// Creates a pool over the given buffers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroInputDim`] or [`Error::ZeroTargetDim`] for zero
    /// dimensions, [`Error::EmptyPool`] for empty buffers, and
    /// [`Error::BufferSizeMismatch`] when a buffer length is not consistent
    /// with the declared dimensions.
    pub fn new(
        inputs: &'a [f64],
        targets: &'a [f64],
        input_dim: usize,
        target_dim: usize,
    ) -> Result<Self> {
        if input_dim == 0 {
            return Err(Error::ZeroInputDim);
        }
        if target_dim == 0 {
            return Err(Error::ZeroTargetDim);
        }
        if inputs.is_empty() {
            return Err(Error::EmptyPool);
        }
        if inputs.len() % input_dim != 0 {
            return Err(Error::BufferSizeMismatch {
                buffer: "inputs",
                expected: (inputs.len() / input_dim + 1) * input_dim,
                got: inputs.len(),
            });
        }
        let num_points = inputs.len() / input_dim;
        if targets.len() != num_points * target_dim {
            return Err(Error::BufferSizeMismatch {
                buffer: "targets",
                expected: num_points * target_dim,
                got: targets.len(),
            });
        }
        Ok(Self {
            inputs,
            targets,
            input_dim,
            target_dim,
            num_points,
        })
    }

    /// Returns the number of candidate points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.num_points
    }

    /// Returns `true` if the pool holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    /// Returns the input dimension.
    #[must_use]
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Returns the target dimension.
    #[must_use]
    pub fn target_dim(&self) -> usize {
        self.target_dim
    }

    /// Returns the input vector of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn input(&self, i: usize) -> &'a [f64] {
        &self.inputs[i * self.input_dim..(i + 1) * self.input_dim]
    }

    /// Returns the target vector of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn target(&self, i: usize) -> &'a [f64] {
        &self.targets[i * self.target_dim..(i + 1) * self.target_dim]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_point_count_from_buffers() {
        let inputs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let targets = [0.1, 0.2];
        let pool = CandidatePool::new(&inputs, &targets, 3, 1).unwrap();

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.input_dim(), 3);
        assert_eq!(pool.input(0), &[1.0, 2.0, 3.0]);
        assert_eq!(pool.input(1), &[4.0, 5.0, 6.0]);
        assert_eq!(pool.target(1), &[0.2]);
    }

    #[test]
    fn rejects_ragged_input_buffer() {
        let inputs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let targets = [0.1, 0.2];
        let err = CandidatePool::new(&inputs, &targets, 3, 1).unwrap_err();

        assert!(matches!(
            err,
            Error::BufferSizeMismatch {
                buffer: "inputs",
                ..
            }
        ));
    }

    #[test]
    fn rejects_target_buffer_mismatch() {
        let inputs = [1.0, 2.0, 3.0, 4.0];
        let targets = [0.1, 0.2, 0.3];
        let err = CandidatePool::new(&inputs, &targets, 2, 1).unwrap_err();

        assert!(matches!(
            err,
            Error::BufferSizeMismatch {
                buffer: "targets",
                expected: 2,
                got: 3,
            }
        ));
    }

    #[test]
    fn rejects_zero_dimensions_and_empty_pool() {
        assert!(matches!(
            CandidatePool::new(&[1.0], &[1.0], 0, 1),
            Err(Error::ZeroInputDim)
        ));
        assert!(matches!(
            CandidatePool::new(&[1.0], &[1.0], 1, 0),
            Err(Error::ZeroTargetDim)
        ));
        assert!(matches!(
            CandidatePool::new(&[], &[], 1, 1),
            Err(Error::EmptyPool)
        ));
    }
}
