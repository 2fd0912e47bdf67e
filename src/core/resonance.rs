use core::f64::consts::TAU;

use hashbrown::HashMap;

use crate::error::Result;
use crate::matrix::SquareMatrix;
use crate::prng::Prng;
use crate::vocab::{SymbolId, Vocabulary};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default simulation length for a resonance query.
pub const DEFAULT_RESONANCE_STEPS: usize = 1000;

/// Default trailing window for resonance scoring.
pub const DEFAULT_SCORE_WINDOW: usize = 200;

/// Tunables for a resonance run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResonatorConfig {
    /// Forward-Euler time step.
    pub dt: f64,
    /// Mean natural frequency; the queried target is pinned to this value.
    pub freq_mean: f64,
    /// Spread of the natural frequency distribution.
    pub freq_sd: f64,
    /// Trailing window for scoring, clamped to the history length.
    pub window: usize,
    /// Makes runs reproducible when set; `run` can override per call.
    /// `None` means a fresh entropy seed per run.
    pub seed: Option<u64>,
}

impl Default for ResonatorConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            freq_mean: 1.0,
            freq_sd: 0.1,
            window: DEFAULT_SCORE_WINDOW,
            seed: None,
        }
    }
}

/// Recorded phase trajectory: one row of N phases per simulation step.
///
/// Append-only during a run, read-only afterwards. Phases are raw integrator
/// output and are never wrapped; consumers that plot trajectories rely on
/// the unwrapped ramps to show locking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseHistory {
    n: usize,
    data: Vec<f64>,
}

impl PhaseHistory {
    fn with_capacity(n: usize, steps: usize) -> Self {
        Self {
            n,
            data: Vec::with_capacity(n * steps),
        }
    }

    fn push_row(&mut self, row: &[f64]) {
        debug_assert_eq!(row.len(), self.n);
        self.data.extend_from_slice(row);
    }

    /// Number of recorded steps (rows).
    pub fn steps(&self) -> usize {
        if self.n == 0 {
            0
        } else {
            self.data.len() / self.n
        }
    }

    /// Number of oscillators (columns).
    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn row(&self, t: usize) -> &[f64] {
        &self.data[t * self.n..(t + 1) * self.n]
    }

    #[inline]
    pub fn phase(&self, t: usize, i: usize) -> f64 {
        self.data[t * self.n + i]
    }

    /// Global Kuramoto order parameter `(r, psi)` at step `t`.
    ///
    /// `r` near 1 means the whole population is phase-locked; near 0 means
    /// incoherent. Complements the per-symbol scores, which measure locking
    /// to one target only.
    pub fn order_parameter(&self, t: usize) -> (f64, f64) {
        let row = self.row(t);
        let mut sum_cos = 0.0;
        let mut sum_sin = 0.0;
        for &theta in row {
            sum_cos += theta.cos();
            sum_sin += theta.sin();
        }
        let n = row.len() as f64;
        let avg_cos = sum_cos / n;
        let avg_sin = sum_sin / n;
        let r = (avg_cos * avg_cos + avg_sin * avg_sin).sqrt();
        let psi = avg_sin.atan2(avg_cos).rem_euclid(TAU);
        (r, psi)
    }
}

/// Phase-oscillator network whose pairwise coupling strengths encode
/// semantic association.
///
/// Querying a concept pins its natural frequency to the reference value and
/// integrates `d theta_i/dt = omega_i + sum_j K_ij * sin(theta_j - theta_i)`;
/// symbols that synchronize with the target are semantically "resonant".
pub struct Resonator {
    vocab: Vocabulary,
    coupling: SquareMatrix,
    cfg: ResonatorConfig,
}

impl Resonator {
    /// Create a resonator with no couplings installed yet.
    pub fn new(vocab: Vocabulary, cfg: ResonatorConfig) -> Self {
        let n = vocab.len();
        Self {
            vocab,
            coupling: SquareMatrix::zeros(n),
            cfg,
        }
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn config(&self) -> &ResonatorConfig {
        &self.cfg
    }

    /// Install symmetric couplings from an association edge list.
    ///
    /// Each edge sets both `K[i][j]` and `K[j][i]`; a repeated pair
    /// overwrites (last write wins, no accumulation). Self-edges are ignored
    /// so the diagonal stays zero. Fails on the first unknown symbol without
    /// touching the matrix.
    pub fn build_coupling(&mut self, edges: &[(&str, &str, f64)]) -> Result<()> {
        let mut resolved = Vec::with_capacity(edges.len());
        for &(a, b, strength) in edges {
            resolved.push((self.vocab.require(a)?, self.vocab.require(b)?, strength));
        }
        for (i, j, strength) in resolved {
            self.coupling.set_symmetric(i, j, strength);
        }
        Ok(())
    }

    /// The coupling matrix K (symmetric, non-negative, zero diagonal).
    pub fn coupling(&self) -> &SquareMatrix {
        &self.coupling
    }

    fn drift(&self, i: usize, phases: &[f64], omega: &[f64]) -> f64 {
        let row = self.coupling.row(i);
        let theta_i = phases[i];
        let mut interaction = 0.0;
        for (j, &k) in row.iter().enumerate() {
            // Zero couplings contribute exactly zero; skipping them changes
            // nothing but keeps sparse lattices cheap.
            if k == 0.0 {
                continue;
            }
            interaction += k * (phases[j] - theta_i).sin();
        }
        omega[i] + interaction
    }

    /// One forward-Euler step of the coupled-oscillator ODE.
    ///
    /// All derivatives are computed from the pre-step phases, then applied
    /// at once.
    pub fn step(&self, phases: &mut [f64], omega: &[f64]) {
        debug_assert_eq!(phases.len(), self.coupling.dim());
        debug_assert_eq!(omega.len(), self.coupling.dim());

        let current: &[f64] = phases;
        let mut d_theta = vec![0.0; current.len()];

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            d_theta
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, d)| *d = self.drift(i, current, omega));
        }
        #[cfg(not(feature = "parallel"))]
        for (i, d) in d_theta.iter_mut().enumerate() {
            *d = self.drift(i, current, omega);
        }

        for (phase, d) in phases.iter_mut().zip(&d_theta) {
            *phase += d * self.cfg.dt;
        }
    }

    /// Integrate the network for `steps` steps and score resonance against
    /// `target`.
    ///
    /// Phases start uniform over [0, 2pi); natural frequencies are drawn
    /// from `Normal(freq_mean, freq_sd)` except the target, which is pinned
    /// to the reference frequency. Every post-step phase vector is recorded.
    /// `seed` overrides the config seed; with both `None` a fresh entropy
    /// seed is used, so pass a seed for reproducible runs.
    pub fn run(
        &self,
        target: &str,
        steps: usize,
        seed: Option<u64>,
    ) -> Result<(PhaseHistory, HashMap<String, f64>)> {
        let target_id = self.vocab.require(target)?;
        let n = self.vocab.len();

        let mut rng = match seed.or(self.cfg.seed) {
            Some(s) => Prng::new(s),
            None => Prng::from_entropy(),
        };

        let mut phases: Vec<f64> = (0..n).map(|_| rng.gen_range_f64(0.0, TAU)).collect();
        let mut omega: Vec<f64> = (0..n)
            .map(|_| rng.normal(self.cfg.freq_mean, self.cfg.freq_sd))
            .collect();
        // The queried concept is driven at the reference frequency.
        omega[target_id] = self.cfg.freq_mean;

        let mut history = PhaseHistory::with_capacity(n, steps);
        for _ in 0..steps {
            self.step(&mut phases, &omega);
            history.push_row(&phases);
        }

        let scores = self.score_by_id(&history, target_id, self.cfg.window);
        Ok((history, scores))
    }

    /// Per-symbol phase correlation with `target`:
    /// `mean(cos(theta_i - theta_target))` over the trailing `window` steps,
    /// clamped to the history length. 1.0 is perfect lock, 0 uncorrelated,
    /// negative anti-phase. The target itself is excluded.
    pub fn score(
        &self,
        history: &PhaseHistory,
        target: &str,
        window: usize,
    ) -> Result<HashMap<String, f64>> {
        let target_id = self.vocab.require(target)?;
        Ok(self.score_by_id(history, target_id, window))
    }

    fn score_by_id(
        &self,
        history: &PhaseHistory,
        target: SymbolId,
        window: usize,
    ) -> HashMap<String, f64> {
        let steps = history.steps();
        let window = window.min(steps);
        let start = steps - window;

        let mut scores = HashMap::with_capacity(self.vocab.len().saturating_sub(1));
        for i in 0..history.dim() {
            if i == target {
                continue;
            }
            let mut acc = 0.0;
            for t in start..steps {
                acc += (history.phase(t, i) - history.phase(t, target)).cos();
            }
            let score = if window == 0 {
                0.0
            } else {
                acc / window as f64
            };
            if let Some(name) = self.vocab.name(i) {
                scores.insert(name.to_string(), score);
            }
        }
        scores
    }
}
