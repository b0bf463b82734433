//! Type-level dispatch to the `xLANGE` routine for each supported element type.

use std::ffi::{c_char, c_int};
use std::fmt::Debug;

use num_complex::{Complex32, Complex64};
use num_traits::Float;

use crate::dtype::DType;
use crate::ffi;

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for num_complex::Complex32 {}
    impl Sealed for num_complex::Complex64 {}
}

/// Element types with an `xLANGE` routine.
///
/// Implemented for `f32` (`slange_`), `f64` (`dlange_`), `Complex32`
/// (`clange_`) and `Complex64` (`zlange_`), and sealed: instantiating the
/// dispatcher for any other element type does not compile. Element types
/// only known at run time go through [`try_lange`](crate::try_lange) or
/// [`lapack_lange`](crate::lapack_lange) instead.
///
/// LAPACK returns a real value for every kind. The dispatcher reports it as
/// `Self` (complex results carry a zero imaginary part) to keep the result
/// in the matrix's own element kind; `Real` exposes the raw value.
pub trait Lange: Copy + Send + Sync + Debug + bytemuck::Pod + private::Sealed + 'static {
    /// Real counterpart of the element type; the type LAPACK returns and
    /// accumulates the workspace in.
    type Real: Float + Debug + Send + Sync + bytemuck::Pod;

    /// Runtime tag for this element type.
    const DTYPE: DType;

    /// Lift a real norm into the element type.
    fn from_real(value: Self::Real) -> Self;

    /// Call the `xLANGE` symbol for this type.
    ///
    /// # Safety
    ///
    /// All pointers must be valid for reads (and `work` for writes) of the
    /// sizes LAPACK derives from `m`, `n`, `lda` and the norm selector.
    unsafe fn lange_raw(
        norm: *const c_char,
        m: *const c_int,
        n: *const c_int,
        a: *const Self,
        lda: *const c_int,
        work: *mut Self::Real,
    ) -> Self::Real;
}

impl Lange for f32 {
    type Real = f32;
    const DTYPE: DType = DType::Float32;

    fn from_real(value: f32) -> f32 {
        value
    }

    unsafe fn lange_raw(
        norm: *const c_char,
        m: *const c_int,
        n: *const c_int,
        a: *const f32,
        lda: *const c_int,
        work: *mut f32,
    ) -> f32 {
        unsafe { ffi::slange_(norm, m, n, a, lda, work) }
    }
}

impl Lange for f64 {
    type Real = f64;
    const DTYPE: DType = DType::Float64;

    fn from_real(value: f64) -> f64 {
        value
    }

    unsafe fn lange_raw(
        norm: *const c_char,
        m: *const c_int,
        n: *const c_int,
        a: *const f64,
        lda: *const c_int,
        work: *mut f64,
    ) -> f64 {
        unsafe { ffi::dlange_(norm, m, n, a, lda, work) }
    }
}

impl Lange for Complex32 {
    type Real = f32;
    const DTYPE: DType = DType::Complex64;

    fn from_real(value: f32) -> Complex32 {
        Complex32::new(value, 0.0)
    }

    unsafe fn lange_raw(
        norm: *const c_char,
        m: *const c_int,
        n: *const c_int,
        a: *const Complex32,
        lda: *const c_int,
        work: *mut f32,
    ) -> f32 {
        unsafe { ffi::clange_(norm, m, n, a, lda, work) }
    }
}

impl Lange for Complex64 {
    type Real = f64;
    const DTYPE: DType = DType::Complex128;

    fn from_real(value: f64) -> Complex64 {
        Complex64::new(value, 0.0)
    }

    unsafe fn lange_raw(
        norm: *const c_char,
        m: *const c_int,
        n: *const c_int,
        a: *const Complex64,
        lda: *const c_int,
        work: *mut f64,
    ) -> f64 {
        unsafe { ffi::zlange_(norm, m, n, a, lda, work) }
    }
}
