//! Reference `xLANGE` kernels exported under the LAPACK symbol names.
//!
//! Test binaries built without the `openblas` feature link these instead of a
//! system LAPACK. They follow LAPACK's semantics: case-insensitive selector,
//! zero for empty matrices, NaN propagation for the max/one/infinity norms,
//! and the workspace used only by the infinity norm.

use std::ffi::{c_char, c_int};

use num_complex::{Complex32, Complex64};
use num_traits::{Float, One, Zero};

trait Entry: Copy {
    type Real: Float;

    fn abs_val(self) -> Self::Real;
}

impl Entry for f32 {
    type Real = f32;

    fn abs_val(self) -> f32 {
        self.abs()
    }
}

impl Entry for f64 {
    type Real = f64;

    fn abs_val(self) -> f64 {
        self.abs()
    }
}

impl Entry for Complex32 {
    type Real = f32;

    fn abs_val(self) -> f32 {
        self.norm()
    }
}

impl Entry for Complex64 {
    type Real = f64;

    fn abs_val(self) -> f64 {
        self.norm()
    }
}

#[inline]
fn take_larger<R: Float>(value: R, candidate: R) -> R {
    if value < candidate || candidate.is_nan() {
        candidate
    } else {
        value
    }
}

unsafe fn lange_reference<T: Entry>(
    norm: c_char,
    m: c_int,
    n: c_int,
    a: *const T,
    lda: c_int,
    work: *mut T::Real,
) -> T::Real {
    let zero = T::Real::zero();
    if m.min(n) <= 0 {
        return zero;
    }
    let (m, n, lda) = (m as usize, n as usize, lda as usize);
    let at = |i: usize, j: usize| unsafe { (*a.add(i + j * lda)).abs_val() };

    match (norm as u8).to_ascii_uppercase() {
        b'M' => {
            let mut value = zero;
            for j in 0..n {
                for i in 0..m {
                    value = take_larger(value, at(i, j));
                }
            }
            value
        }
        b'O' | b'1' => {
            let mut value = zero;
            for j in 0..n {
                let mut sum = zero;
                for i in 0..m {
                    sum = sum + at(i, j);
                }
                value = take_larger(value, sum);
            }
            value
        }
        b'I' => unsafe {
            for i in 0..m {
                *work.add(i) = zero;
            }
            for j in 0..n {
                for i in 0..m {
                    *work.add(i) = *work.add(i) + at(i, j);
                }
            }
            let mut value = zero;
            for i in 0..m {
                value = take_larger(value, *work.add(i));
            }
            value
        },
        b'F' | b'E' => {
            // Scaled sum of squares, as in xLASSQ.
            let mut scale = zero;
            let mut ssq = T::Real::one();
            for j in 0..n {
                for i in 0..m {
                    let t = at(i, j);
                    if t != zero {
                        if scale < t {
                            let r = scale / t;
                            ssq = T::Real::one() + ssq * r * r;
                            scale = t;
                        } else {
                            let r = t / scale;
                            ssq = ssq + r * r;
                        }
                    }
                }
            }
            scale * ssq.sqrt()
        }
        _ => zero,
    }
}

#[no_mangle]
pub unsafe extern "C" fn slange_(
    norm: *const c_char,
    m: *const c_int,
    n: *const c_int,
    a: *const f32,
    lda: *const c_int,
    work: *mut f32,
) -> f32 {
    unsafe { lange_reference(*norm, *m, *n, a, *lda, work) }
}

#[no_mangle]
pub unsafe extern "C" fn dlange_(
    norm: *const c_char,
    m: *const c_int,
    n: *const c_int,
    a: *const f64,
    lda: *const c_int,
    work: *mut f64,
) -> f64 {
    unsafe { lange_reference(*norm, *m, *n, a, *lda, work) }
}

#[no_mangle]
pub unsafe extern "C" fn clange_(
    norm: *const c_char,
    m: *const c_int,
    n: *const c_int,
    a: *const Complex32,
    lda: *const c_int,
    work: *mut f32,
) -> f32 {
    unsafe { lange_reference(*norm, *m, *n, a, *lda, work) }
}

#[no_mangle]
pub unsafe extern "C" fn zlange_(
    norm: *const c_char,
    m: *const c_int,
    n: *const c_int,
    a: *const Complex64,
    lda: *const c_int,
    work: *mut f64,
) -> f64 {
    unsafe { lange_reference(*norm, *m, *n, a, *lda, work) }
}
