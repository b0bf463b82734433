//! Matrix norm selector.

use std::ffi::c_char;
use std::fmt;

use crate::{LangeError, Result};

/// Which matrix norm `xLANGE` computes.
///
/// LAPACK selects the norm with a single character; [`Norm::as_char`] gives
/// the canonical one and [`Norm::from_char`] accepts every spelling LAPACK
/// does (case-insensitive, `'O'` for the one norm, `'E'` for Frobenius).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Norm {
    /// `max(abs(A(i,j)))`. Not a consistent matrix norm.
    Max,
    /// Maximum column sum of absolute values.
    One,
    /// Maximum row sum of absolute values.
    Infinity,
    /// Square root of the sum of squares.
    Frobenius,
}

impl Norm {
    /// All norms, in LAPACK's documentation order.
    pub const ALL: [Norm; 4] = [Norm::Max, Norm::One, Norm::Infinity, Norm::Frobenius];

    /// Canonical selector character passed to LAPACK.
    pub fn as_char(self) -> char {
        match self {
            Norm::Max => 'M',
            Norm::One => '1',
            Norm::Infinity => 'I',
            Norm::Frobenius => 'F',
        }
    }

    /// Selector in the form the FFI boundary expects.
    pub fn as_c_char(self) -> c_char {
        self.as_char() as u8 as c_char
    }

    /// Parse a LAPACK selector character.
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'M' => Ok(Norm::Max),
            '1' | 'O' => Ok(Norm::One),
            'I' => Ok(Norm::Infinity),
            'F' | 'E' => Ok(Norm::Frobenius),
            _ => Err(LangeError::InvalidNorm(c)),
        }
    }

    /// Number of workspace elements `xLANGE` touches for a matrix with `rows` rows.
    ///
    /// Only the infinity norm accumulates per-row sums; the other norms never
    /// reference the workspace.
    pub fn workspace_len(self, rows: usize) -> usize {
        match self {
            Norm::Infinity => rows,
            Norm::Max | Norm::One | Norm::Frobenius => 0,
        }
    }
}

impl TryFrom<char> for Norm {
    type Error = LangeError;

    fn try_from(c: char) -> Result<Self> {
        Norm::from_char(c)
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Norm::Max => "max-abs",
            Norm::One => "one",
            Norm::Infinity => "infinity",
            Norm::Frobenius => "frobenius",
        };
        write!(f, "{} ('{}')", name, self.as_char())
    }
}
