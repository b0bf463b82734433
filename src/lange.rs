//! Norm entry points, from raw LAPACK-style calls up to checked slice views.
//!
//! - [`lange_unchecked`] / [`lange_real_unchecked`]: raw pointers, arguments forwarded as-is
//! - [`lange`] / [`lange_real`] / [`lange_slice`]: validated [`ColMajor`] views and workspaces
//! - [`try_lange`] / [`lange_any`]: any `'static` element type, `NotImplemented` for the rest
//! - [`lapack_lange`] / [`lapack_lange_bytes`]: untyped buffers tagged with a [`DType`]

use std::any::{type_name, TypeId};
use std::ffi::{c_char, c_int, c_void};

use num_complex::{Complex32, Complex64};

use crate::dtype::{DType, NormValue};
use crate::lapack::Lange;
use crate::matrix::{required_len, ColMajor};
use crate::norm::Norm;
use crate::{LangeError, Result};

// ============================================================================
// Raw dispatch
// ============================================================================

/// Compute a matrix norm with the `xLANGE` routine for `T`.
///
/// Arguments are forwarded unchanged, including the norm selector, which is
/// not validated. The result is the norm in `T`'s own kind; for complex `T`
/// the imaginary part is zero.
///
/// # Safety
///
/// - `a` must point to a column-major `m x n` matrix with column stride `lda >= max(1, m)`.
/// - For the infinity norm (`'I'`), `work` must be valid for `m` writes of `T`.
///   Other norms do not reference it.
pub unsafe fn lange_unchecked<T: Lange>(
    norm: c_char,
    m: c_int,
    n: c_int,
    a: *const T,
    lda: c_int,
    work: *mut T,
) -> T {
    T::from_real(unsafe { lange_real_unchecked(norm, m, n, a, lda, work) })
}

/// Like [`lange_unchecked`], returning LAPACK's real value.
///
/// # Safety
///
/// Same contract as [`lange_unchecked`].
pub unsafe fn lange_real_unchecked<T: Lange>(
    norm: c_char,
    m: c_int,
    n: c_int,
    a: *const T,
    lda: c_int,
    work: *mut T,
) -> T::Real {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        dtype = %T::DTYPE,
        norm = %(norm as u8 as char),
        m,
        n,
        lda,
        "dispatching xLANGE"
    );

    // A complex workspace of `m` entries holds `2m` reals, more than LAPACK needs.
    unsafe { T::lange_raw(&norm, &m, &n, a, &lda, work.cast::<T::Real>()) }
}

// ============================================================================
// Checked dispatch
// ============================================================================

/// Compute a matrix norm of a validated view.
///
/// `work` must hold at least [`Norm::workspace_len`] elements; its contents
/// afterwards are unspecified. The matrix is only read.
pub fn lange<T: Lange>(norm: Norm, a: &ColMajor<'_, T>, work: &mut [T]) -> Result<T> {
    lange_real(norm, a, work).map(T::from_real)
}

/// Like [`lange`], returning LAPACK's real value.
pub fn lange_real<T: Lange>(norm: Norm, a: &ColMajor<'_, T>, work: &mut [T]) -> Result<T::Real> {
    check_workspace(norm, a.rows(), work.len())?;
    let (m, n, lda) = a.lapack_dims()?;
    let work = work.as_mut_ptr();
    Ok(unsafe { lange_real_unchecked(norm.as_c_char(), m, n, a.as_ptr(), lda, work) })
}

/// Compute a matrix norm of `rows x cols` elements of `data` with column stride `lda`.
pub fn lange_slice<T: Lange>(
    norm: Norm,
    rows: usize,
    cols: usize,
    data: &[T],
    lda: usize,
    work: &mut [T],
) -> Result<T> {
    let a = ColMajor::new(data, rows, cols, lda)?;
    lange(norm, &a, work)
}

fn check_workspace(norm: Norm, rows: usize, len: usize) -> Result<()> {
    let required = norm.workspace_len(rows);
    if len < required {
        return Err(LangeError::WorkspaceTooSmall {
            required,
            actual: len,
        });
    }
    Ok(())
}

// ============================================================================
// Generic fallback
// ============================================================================

/// Compute a matrix norm for an element type that is only known to be `'static`.
///
/// The four LAPACK element types are routed to [`lange_unchecked`]; any other
/// `T` fails with [`LangeError::NotImplemented`] before either buffer is
/// touched.
///
/// # Safety
///
/// Same contract as [`lange_unchecked`] when `T` is supported.
pub unsafe fn try_lange<T: Copy + 'static>(
    norm: c_char,
    m: c_int,
    n: c_int,
    a: *const T,
    lda: c_int,
    work: *mut T,
) -> Result<T> {
    let id = TypeId::of::<T>();
    unsafe {
        if id == TypeId::of::<f32>() {
            Ok(forward::<T, f32>(norm, m, n, a, lda, work))
        } else if id == TypeId::of::<f64>() {
            Ok(forward::<T, f64>(norm, m, n, a, lda, work))
        } else if id == TypeId::of::<Complex32>() {
            Ok(forward::<T, Complex32>(norm, m, n, a, lda, work))
        } else if id == TypeId::of::<Complex64>() {
            Ok(forward::<T, Complex64>(norm, m, n, a, lda, work))
        } else {
            Err(not_implemented(
                DType::of::<T>().map_or(type_name::<T>(), DType::name),
            ))
        }
    }
}

/// Calls the dispatcher for `U` on buffers typed as `T`.
///
/// Callers guarantee `T` and `U` are the same type.
unsafe fn forward<T: Copy + 'static, U: Lange>(
    norm: c_char,
    m: c_int,
    n: c_int,
    a: *const T,
    lda: c_int,
    work: *mut T,
) -> T {
    debug_assert_eq!(TypeId::of::<T>(), TypeId::of::<U>());
    unsafe {
        let value = lange_unchecked::<U>(norm, m, n, a.cast::<U>(), lda, work.cast::<U>());
        std::mem::transmute_copy::<U, T>(&value)
    }
}

/// Checked counterpart of [`try_lange`] over a validated view.
pub fn lange_any<T: Copy + 'static>(norm: Norm, a: &ColMajor<'_, T>, work: &mut [T]) -> Result<T> {
    let supported = DType::of::<T>().is_some_and(DType::is_lapack_supported);
    if !supported {
        return Err(not_implemented(
            DType::of::<T>().map_or(type_name::<T>(), DType::name),
        ));
    }
    check_workspace(norm, a.rows(), work.len())?;
    let (m, n, lda) = a.lapack_dims()?;
    unsafe { try_lange(norm.as_c_char(), m, n, a.as_ptr(), lda, work.as_mut_ptr()) }
}

// ============================================================================
// Untyped dispatch
// ============================================================================

/// Compute a matrix norm over untyped buffers whose element kind is `dtype`.
///
/// Non-LAPACK dtypes fail with [`LangeError::NotImplemented`] and neither
/// buffer is touched.
///
/// # Safety
///
/// For supported dtypes, `a` and `work` must satisfy the contract of
/// [`lange_unchecked`] for the Rust type matching `dtype`.
pub unsafe fn lapack_lange(
    dtype: DType,
    norm: c_char,
    m: c_int,
    n: c_int,
    a: *const c_void,
    lda: c_int,
    work: *mut c_void,
) -> Result<NormValue> {
    let value = unsafe {
        match dtype {
            DType::Float32 => NormValue::Float32(lange_unchecked::<f32>(
                norm,
                m,
                n,
                a.cast(),
                lda,
                work.cast(),
            )),
            DType::Float64 => NormValue::Float64(lange_unchecked::<f64>(
                norm,
                m,
                n,
                a.cast(),
                lda,
                work.cast(),
            )),
            DType::Complex64 => NormValue::Complex64(lange_unchecked::<Complex32>(
                norm,
                m,
                n,
                a.cast(),
                lda,
                work.cast(),
            )),
            DType::Complex128 => NormValue::Complex128(lange_unchecked::<Complex64>(
                norm,
                m,
                n,
                a.cast(),
                lda,
                work.cast(),
            )),
            DType::Byte
            | DType::Int8
            | DType::Int16
            | DType::Int32
            | DType::Int64
            | DType::RObject => return Err(not_implemented(dtype.name())),
        }
    };
    Ok(value)
}

/// Checked counterpart of [`lapack_lange`] over raw byte storage.
///
/// `a` and `work` are reinterpreted as slices of `dtype`'s element type; they
/// must be suitably aligned and a whole number of elements long.
pub fn lapack_lange_bytes(
    dtype: DType,
    norm: Norm,
    rows: usize,
    cols: usize,
    a: &[u8],
    lda: usize,
    work: &mut [u8],
) -> Result<NormValue> {
    match dtype {
        DType::Float32 => lange_bytes::<f32>(norm, rows, cols, a, lda, work).map(NormValue::Float32),
        DType::Float64 => lange_bytes::<f64>(norm, rows, cols, a, lda, work).map(NormValue::Float64),
        DType::Complex64 => {
            lange_bytes::<Complex32>(norm, rows, cols, a, lda, work).map(NormValue::Complex64)
        }
        DType::Complex128 => {
            lange_bytes::<Complex64>(norm, rows, cols, a, lda, work).map(NormValue::Complex128)
        }
        DType::Byte | DType::Int8 | DType::Int16 | DType::Int32 | DType::Int64 | DType::RObject => {
            Err(not_implemented(dtype.name()))
        }
    }
}

fn lange_bytes<T: Lange>(
    norm: Norm,
    rows: usize,
    cols: usize,
    a: &[u8],
    lda: usize,
    work: &mut [u8],
) -> Result<T> {
    let layout_err = |_: bytemuck::PodCastError| LangeError::ByteLayout {
        dtype: T::DTYPE.name(),
    };
    // Buffers LAPACK never reads are not cast; an empty byte slice may be misaligned.
    let a: &[T] = if a.is_empty() || required_len(rows, cols, lda) == Some(0) {
        &[]
    } else {
        bytemuck::try_cast_slice(a).map_err(layout_err)?
    };
    let work: &mut [T] = if work.is_empty() || norm.workspace_len(rows) == 0 {
        &mut []
    } else {
        bytemuck::try_cast_slice_mut(work).map_err(layout_err)?
    };
    let a = ColMajor::new(a, rows, cols, lda)?;
    lange(norm, &a, work)
}

fn not_implemented(dtype: &'static str) -> LangeError {
    #[cfg(feature = "tracing")]
    tracing::debug!(dtype, "xLANGE requested for non-LAPACK element type");
    LangeError::NotImplemented { dtype }
}
