#![allow(dead_code)]

#[cfg(not(feature = "openblas"))]
mod reference_lapack;

use num_complex::{Complex32, Complex64};
use rand::{rngs::StdRng, Rng, SeedableRng};
use strided_lange::Norm;

/// Column-major storage of `rows x cols` with column stride `lda`, padding filled with `pad`.
pub fn col_major<T: Copy>(
    rows: usize,
    cols: usize,
    lda: usize,
    pad: T,
    f: impl Fn(usize, usize) -> T,
) -> Vec<T> {
    let mut data = vec![pad; lda * cols];
    for j in 0..cols {
        for i in 0..rows {
            data[i + j * lda] = f(i, j);
        }
    }
    data
}

pub fn random_f64(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect()
}

pub fn random_c64(seed: u64, len: usize) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| Complex64::new(rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5))
        .collect()
}

pub fn to_c32(values: &[Complex64]) -> Vec<Complex32> {
    values
        .iter()
        .map(|z| Complex32::new(z.re as f32, z.im as f32))
        .collect()
}

/// Norm of a matrix given the absolute value of every entry, computed in `f64`.
pub fn expected_norm(
    norm: Norm,
    rows: usize,
    cols: usize,
    lda: usize,
    abs: impl Fn(usize) -> f64,
) -> f64 {
    if rows == 0 || cols == 0 {
        return 0.0;
    }
    let entry = |i: usize, j: usize| abs(i + j * lda);
    match norm {
        Norm::Max => (0..cols)
            .flat_map(|j| (0..rows).map(move |i| (i, j)))
            .map(|(i, j)| entry(i, j))
            .fold(0.0, f64::max),
        Norm::One => (0..cols)
            .map(|j| (0..rows).map(|i| entry(i, j)).sum::<f64>())
            .fold(0.0, f64::max),
        Norm::Infinity => (0..rows)
            .map(|i| (0..cols).map(|j| entry(i, j)).sum::<f64>())
            .fold(0.0, f64::max),
        Norm::Frobenius => (0..cols)
            .flat_map(|j| (0..rows).map(move |i| (i, j)))
            .map(|(i, j)| entry(i, j).powi(2))
            .sum::<f64>()
            .sqrt(),
    }
}
