//! Runtime element-kind tags for untyped matrix storage.
//!
//! A dynamically-typed array keeps its elements as raw bytes next to a
//! [`DType`]. Only four of those kinds have an `xLANGE` routine; the rest
//! surface as [`LangeError::NotImplemented`](crate::LangeError::NotImplemented).
//!
//! Complex dtypes are named by their *total* width: [`DType::Complex64`] is a
//! pair of `f32` ([`num_complex::Complex32`]) and [`DType::Complex128`] a pair
//! of `f64` ([`num_complex::Complex64`]).

use std::any::TypeId;
use std::fmt;
use std::str::FromStr;

use num_complex::{Complex32, Complex64};

use crate::LangeError;

/// Element kind of an untyped matrix buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Byte,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Complex64,
    Complex128,
    /// Boxed host-language objects, stored as pointers.
    RObject,
}

impl DType {
    pub const ALL: [DType; 10] = [
        DType::Byte,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Int64,
        DType::Float32,
        DType::Float64,
        DType::Complex64,
        DType::Complex128,
        DType::RObject,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DType::Byte => "byte",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Complex64 => "complex64",
            DType::Complex128 => "complex128",
            DType::RObject => "object",
        }
    }

    /// Bytes per element.
    pub fn size_of(self) -> usize {
        match self {
            DType::Byte | DType::Int8 => 1,
            DType::Int16 => 2,
            DType::Int32 | DType::Float32 => 4,
            DType::Int64 | DType::Float64 | DType::Complex64 => 8,
            DType::Complex128 => 16,
            DType::RObject => std::mem::size_of::<*const ()>(),
        }
    }

    pub fn is_complex(self) -> bool {
        matches!(self, DType::Complex64 | DType::Complex128)
    }

    /// Whether LAPACK provides an `xLANGE` routine for this kind.
    pub fn is_lapack_supported(self) -> bool {
        matches!(
            self,
            DType::Float32 | DType::Float64 | DType::Complex64 | DType::Complex128
        )
    }

    /// The dtype whose storage is `T`, if any.
    pub fn of<T: 'static>() -> Option<DType> {
        let id = TypeId::of::<T>();
        [
            (TypeId::of::<u8>(), DType::Byte),
            (TypeId::of::<i8>(), DType::Int8),
            (TypeId::of::<i16>(), DType::Int16),
            (TypeId::of::<i32>(), DType::Int32),
            (TypeId::of::<i64>(), DType::Int64),
            (TypeId::of::<f32>(), DType::Float32),
            (TypeId::of::<f64>(), DType::Float64),
            (TypeId::of::<Complex32>(), DType::Complex64),
            (TypeId::of::<Complex64>(), DType::Complex128),
        ]
        .into_iter()
        .find(|(tid, _)| *tid == id)
        .map(|(_, dtype)| dtype)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = LangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DType::ALL
            .into_iter()
            .find(|dtype| dtype.name() == s)
            .ok_or_else(|| LangeError::UnknownDType(s.to_string()))
    }
}

/// Result of a norm computed through the untyped entry point.
///
/// The variant mirrors the dtype of the input matrix, so complex inputs
/// produce a complex value whose imaginary part is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormValue {
    Float32(f32),
    Float64(f64),
    Complex64(Complex32),
    Complex128(Complex64),
}

impl NormValue {
    pub fn dtype(&self) -> DType {
        match self {
            NormValue::Float32(_) => DType::Float32,
            NormValue::Float64(_) => DType::Float64,
            NormValue::Complex64(_) => DType::Complex64,
            NormValue::Complex128(_) => DType::Complex128,
        }
    }

    /// The norm as a plain `f64`.
    pub fn magnitude(&self) -> f64 {
        match *self {
            NormValue::Float32(v) => v as f64,
            NormValue::Float64(v) => v,
            NormValue::Complex64(c) => c.re as f64,
            NormValue::Complex128(c) => c.re,
        }
    }
}
