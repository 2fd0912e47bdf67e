#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense row-major N x N matrix of `f64`.
///
/// Used for both the liquid Hebbian weight matrix and the oscillator
/// coupling matrix; both keep a zero diagonal and stay symmetric through
/// the operations exposed here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquareMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
    }

    /// Set both (i, j) and (j, i). Diagonal writes are ignored so the
    /// zero-diagonal invariant holds regardless of input.
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        if i == j {
            return;
        }
        self.set(i, j, value);
        self.set(j, i, value);
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Accumulate the outer product `p * p^T`.
    pub fn add_outer(&mut self, p: &[f64]) {
        debug_assert_eq!(p.len(), self.n);
        for (i, &pi) in p.iter().enumerate() {
            let row = &mut self.data[i * self.n..(i + 1) * self.n];
            for (cell, &pj) in row.iter_mut().zip(p) {
                *cell += pi * pj;
            }
        }
    }

    pub fn zero_diagonal(&mut self) {
        for i in 0..self.n {
            self.data[i * self.n + i] = 0.0;
        }
    }

    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Mean of absolute values over all N^2 entries; 0.0 for an empty matrix.
    pub fn mean_abs(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().map(|v| v.abs()).sum::<f64>() / self.data.len() as f64
    }
}

/// N x N matrix with entries restricted to {-1, 0, 1}, stored as `i8`.
///
/// Produced once by crystallization and immutable afterwards. The compact
/// storage is a density property only; the dynamics care solely about the
/// sign of each entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TernaryMatrix {
    n: usize,
    data: Vec<i8>,
}

impl TernaryMatrix {
    pub(crate) fn from_raw(n: usize, data: Vec<i8>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        debug_assert!(data.iter().all(|v| (-1..=1).contains(v)));
        Self { n, data }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i8 {
        self.data[i * self.n + j]
    }

    pub fn values(&self) -> &[i8] {
        &self.data
    }

    pub fn nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Compute `h = J * state`. Zero entries contribute nothing and are
    /// skipped.
    pub fn matvec(&self, state: &[f64]) -> Vec<f64> {
        debug_assert_eq!(state.len(), self.n);
        let mut h = vec![0.0; self.n];
        for (i, hi) in h.iter_mut().enumerate() {
            let row = &self.data[i * self.n..(i + 1) * self.n];
            let mut acc = 0.0;
            for (&w, &s) in row.iter().zip(state) {
                match w {
                    1 => acc += s,
                    -1 => acc -= s,
                    _ => {}
                }
            }
            *hi = acc;
        }
        h
    }
}
