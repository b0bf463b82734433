//! Type-dispatched bindings to LAPACK's `xLANGE` matrix-norm routines.
//!
//! LAPACK provides one norm routine per element type (`slange_`, `dlange_`,
//! `clange_`, `zlange_`). This crate picks the right one at compile time
//! through the sealed [`Lange`] trait, and exposes the same dispatch to
//! callers that only know the element kind at run time ([`DType`]).
//! The norm itself is always computed by the linked LAPACK.
//!
//! # Entry points
//!
//! - [`lange`], [`lange_real`], [`lange_slice`]: validated column-major views ([`ColMajor`])
//! - [`lange_unchecked`], [`lange_real_unchecked`]: raw pointers, forwarded to LAPACK as-is
//! - [`try_lange`], [`lange_any`]: any `'static` element type; non-LAPACK types
//!   fail with [`LangeError::NotImplemented`]
//! - [`lapack_lange`], [`lapack_lange_bytes`]: untyped storage tagged with a [`DType`]
//!
//! # Example
//!
//! ```ignore
//! use strided_lange::{lange, ColMajor, Norm};
//!
//! // [[1, -7], [3, 4]] stored column by column
//! let data = [1.0f64, 3.0, -7.0, 4.0];
//! let a = ColMajor::from_slice(&data, 2, 2).unwrap();
//! let mut work = vec![0.0; Norm::Infinity.workspace_len(a.rows())];
//!
//! assert_eq!(lange(Norm::Max, &a, &mut work).unwrap(), 7.0);
//! assert_eq!(lange(Norm::One, &a, &mut work).unwrap(), 11.0);
//! assert_eq!(lange(Norm::Infinity, &a, &mut work).unwrap(), 8.0);
//! ```
//!
//! # Linking
//!
//! With the `openblas` feature the build script links `libopenblas`
//! (`OPENBLAS_LIB_DIR` overrides the search path). Without it the `xLANGE`
//! symbols are left for the final binary to provide.

pub mod dtype;
pub mod ffi;
mod lange;
mod lapack;
pub mod matrix;
mod norm;

#[cfg(all(test, not(feature = "openblas")))]
#[path = "../tests/support/reference_lapack.rs"]
mod reference_lapack;

// ============================================================================
// Dispatch
// ============================================================================
pub use lange::{
    lange, lange_any, lange_real, lange_real_unchecked, lange_slice, lange_unchecked,
    lapack_lange, lapack_lange_bytes, try_lange,
};
pub use lapack::Lange;

// ============================================================================
// Types
// ============================================================================
pub use dtype::{DType, NormValue};
pub use matrix::{required_len, ColMajor};
pub use norm::Norm;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur when computing a matrix norm.
#[derive(Debug, thiserror::Error)]
pub enum LangeError {
    /// The element kind has no `xLANGE` routine.
    #[error("lange not yet implemented for non-BLAS dtype {dtype}")]
    NotImplemented { dtype: &'static str },

    /// Norm selector is not one LAPACK understands.
    #[error("invalid norm selector {0:?}")]
    InvalidNorm(char),

    /// Unknown dtype name.
    #[error("unknown dtype {0:?}")]
    UnknownDType(String),

    /// Leading dimension is smaller than `max(1, rows)`.
    #[error("leading dimension {lda} is smaller than max(1, rows={rows})")]
    LeadingDimension { lda: usize, rows: usize },

    /// Matrix buffer is too short for the requested shape.
    #[error("matrix buffer too small: need {required} elements, got {actual}")]
    MatrixTooSmall { required: usize, actual: usize },

    /// Workspace is too short for the requested norm.
    #[error("workspace too small: need {required} elements, got {actual}")]
    WorkspaceTooSmall { required: usize, actual: usize },

    /// A dimension does not fit LAPACK's integer type.
    #[error("dimension {0} does not fit a LAPACK integer")]
    DimensionOverflow(usize),

    /// Byte storage is misaligned or not a whole number of elements.
    #[error("byte buffer is not an aligned array of {dtype} elements")]
    ByteLayout { dtype: &'static str },
}

/// Result type for norm computations.
pub type Result<T> = std::result::Result<T, LangeError>;
