#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the requested subset size is zero.
    #[error("invalid max size: must be positive")]
    InvalidMaxSize,

    /// Returned when the candidate pool contains no points.
    #[error("candidate pool cannot be empty")]
    EmptyPool,

    /// Returned when the input dimension is zero.
    #[error("input dimension must be positive")]
    ZeroInputDim,

    /// Returned when the target dimension is zero.
    #[error("target dimension must be positive")]
    ZeroTargetDim,

    /// Returned when a buffer length is inconsistent with the declared dimensions.
    #[error("buffer size mismatch for {buffer}: expected {expected} scalars, got {got}")]
    BufferSizeMismatch {
        /// Which buffer is inconsistent.
        buffer: &'static str,
        /// The length implied by the dimensions.
        expected: usize,
        /// The actual buffer length.
        got: usize,
    },

    /// Returned when the kernel parameter vector fits neither the isotropic
    /// nor the per-dimension layout.
    #[error("kernel parameter mismatch: expected 1 or {input_dim} length scales, got {got}")]
    KernelParamMismatch {
        /// The input dimension of the candidate pool.
        input_dim: usize,
        /// The number of kernel parameters supplied.
        got: usize,
    },

    /// Returned when the early-stop tolerance is negative or not finite.
    #[error("invalid tolerance: {0} must be finite and non-negative")]
    InvalidTolerance(f64),

    /// Returned when extending the active covariance factor fails because the
    /// submatrix is no longer positive definite (duplicate or near-duplicate
    /// candidate points). Selection cannot safely continue.
    #[error("covariance not positive definite when adding candidate {index}")]
    NotPositiveDefinite {
        /// The candidate pool index whose addition failed.
        index: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
