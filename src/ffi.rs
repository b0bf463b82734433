//! Raw declarations of LAPACK's `xLANGE` routines.
//!
//! Every argument is passed by address, following the Fortran calling
//! convention. The complex variants take a *real* workspace and return a
//! *real* value; see [`Lange`](crate::Lange) for how the typed layer maps
//! that back onto the element type.
//!
//! The symbols are resolved at link time: by `libopenblas` with the
//! `openblas` feature, otherwise by whatever LAPACK the final binary links.

use std::ffi::{c_char, c_int};

use num_complex::{Complex32, Complex64};

extern "C" {
    pub fn slange_(
        norm: *const c_char,
        m: *const c_int,
        n: *const c_int,
        a: *const f32,
        lda: *const c_int,
        work: *mut f32,
    ) -> f32;

    pub fn dlange_(
        norm: *const c_char,
        m: *const c_int,
        n: *const c_int,
        a: *const f64,
        lda: *const c_int,
        work: *mut f64,
    ) -> f64;

    pub fn clange_(
        norm: *const c_char,
        m: *const c_int,
        n: *const c_int,
        a: *const Complex32,
        lda: *const c_int,
        work: *mut f32,
    ) -> f32;

    pub fn zlange_(
        norm: *const c_char,
        m: *const c_int,
        n: *const c_int,
        a: *const Complex64,
        lda: *const c_int,
        work: *mut f64,
    ) -> f64;
}
