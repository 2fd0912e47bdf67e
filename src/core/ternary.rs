use crate::error::{Error, Result};
use crate::matrix::{SquareMatrix, TernaryMatrix};
use crate::observer::{Event, EventHook};
use crate::vocab::Vocabulary;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default recall iteration budget.
pub const DEFAULT_RECALL_STEPS: usize = 10;

// Guard against division by zero when quantizing an all-zero matrix.
const QUANT_EPSILON: f64 = 1e-9;

/// Map a real weight matrix to {-1, 0, 1} by magnitude-scaled rounding.
///
/// The scale `gamma = mean(|W|) + epsilon` is global: a single pass keeps the
/// operation O(N^2) and independent of any particular row. Hebbian sums are
/// roughly homogeneous in magnitude across a learned matrix, so a per-row
/// scale buys little here.
pub fn quantize(weights: &SquareMatrix) -> TernaryMatrix {
    let gamma = weights.mean_abs() + QUANT_EPSILON;
    let data = weights
        .values()
        .iter()
        .map(|v| (v / gamma).round().clamp(-1.0, 1.0) as i8)
        .collect();
    TernaryMatrix::from_raw(weights.dim(), data)
}

/// Terminal state of a recall run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecallOutcome {
    /// The state reached an exact fixed point after `steps` updates.
    Converged { steps: usize },
    /// The iteration budget ran out first. The synchronous update can cycle
    /// between two states indefinitely, so this is an accepted outcome, not
    /// an error.
    MaxStepsReached,
}

/// Final state and energy trace of a recall run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecallResult {
    pub state: Vec<f64>,
    /// One entry per executed step, computed from the pre-update state.
    pub energy_trace: Vec<f64>,
    pub outcome: RecallOutcome,
}

/// Read-only summary of a network's state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    pub symbols: usize,
    pub patterns_seen: usize,
    pub crystallized: bool,
    /// L1 mass of the liquid weight matrix.
    pub weight_mass: f64,
    /// Nonzero entries in the ternary matrix, 0 before crystallization.
    pub ternary_nonzero: usize,
}

/// Ternary associative memory over a fixed vocabulary.
///
/// Weights live in two phases: a liquid `f64` matrix fed by Hebbian
/// accumulation, and a crystallized ternary matrix that drives recall. The
/// transition is one-way; there is no un-crystallize. Re-crystallizing after
/// further training re-quantizes the current liquid weights.
pub struct TernaryNet {
    vocab: Vocabulary,
    weights: SquareMatrix,
    ternary: Option<TernaryMatrix>,
    patterns_seen: usize,
    hook: Option<EventHook>,
}

impl TernaryNet {
    pub fn new(vocab: Vocabulary) -> Self {
        let n = vocab.len();
        Self {
            vocab,
            weights: SquareMatrix::zeros(n),
            ternary: None,
            patterns_seen: 0,
            hook: None,
        }
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// The liquid weight matrix (symmetric, zero diagonal).
    pub fn weights(&self) -> &SquareMatrix {
        &self.weights
    }

    /// Install a lifecycle event hook. Replaces any previous hook.
    pub fn set_event_hook(&mut self, hook: EventHook) {
        self.hook = Some(hook);
    }

    pub fn clear_event_hook(&mut self) {
        self.hook = None;
    }

    fn emit(&mut self, event: Event) {
        if let Some(hook) = &mut self.hook {
            hook(&event);
        }
    }

    /// Accumulate Hebbian weights: for each pattern `p`, add `p * p^T`, then
    /// force the diagonal to zero (no self-coupling).
    ///
    /// Raw superposition, no normalization by pattern count. Accumulation is
    /// cumulative across calls; use [`TernaryNet::reset_weights`] to start
    /// over. Any pattern of the wrong length fails the whole call before any
    /// mutation.
    pub fn train(&mut self, patterns: &[Vec<f64>]) -> Result<()> {
        let n = self.weights.dim();
        for p in patterns {
            if p.len() != n {
                return Err(Error::DimensionMismatch {
                    expected: n,
                    found: p.len(),
                });
            }
        }

        self.emit(Event::TrainingStarted {
            patterns: patterns.len(),
        });

        for p in patterns {
            self.weights.add_outer(p);
        }
        self.weights.zero_diagonal();
        self.patterns_seen += patterns.len();

        self.emit(Event::TrainingFinished {
            patterns: patterns.len(),
            total: self.patterns_seen,
        });
        Ok(())
    }

    /// Discard accumulated liquid weights so training can start over.
    /// An already-crystallized matrix is untouched.
    pub fn reset_weights(&mut self) {
        self.weights.clear();
        self.patterns_seen = 0;
    }

    /// Freeze the liquid weights into the ternary matrix.
    pub fn crystallize(&mut self) {
        let ternary = quantize(&self.weights);
        let n = ternary.dim();
        self.emit(Event::Crystallized {
            float_bits: n * n * 64,
            ternary_bits: n * n * 2,
        });
        self.ternary = Some(ternary);
    }

    pub fn is_crystallized(&self) -> bool {
        self.ternary.is_some()
    }

    /// The crystallized adjacency matrix, for downstream graph exporters.
    pub fn adjacency_matrix(&self) -> Result<&TernaryMatrix> {
        self.ternary.as_ref().ok_or(Error::NotCrystallized)
    }

    /// Run synchronous sign-update dynamics from `query` to a fixed point or
    /// until `max_steps` is exhausted.
    ///
    /// Each step computes `h = J * state` and flips every component to
    /// `sign(h)` at once; exact ties (`h == 0`) keep their previous value.
    /// The energy `-0.5 * state^T J state` is recorded before each update.
    /// `max_steps == 0` returns the query unchanged with an empty trace.
    pub fn recall(&mut self, query: &[f64], max_steps: usize) -> Result<RecallResult> {
        let n = self.weights.dim();
        if query.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: query.len(),
            });
        }
        let ternary = self.ternary.as_ref().ok_or(Error::NotCrystallized)?;

        let mut state = query.to_vec();
        let mut energy_trace = Vec::with_capacity(max_steps);
        let mut outcome = RecallOutcome::MaxStepsReached;

        for _ in 0..max_steps {
            let h = ternary.matvec(&state);
            let energy = -0.5 * state.iter().zip(&h).map(|(s, hi)| s * hi).sum::<f64>();
            energy_trace.push(energy);

            let next: Vec<f64> = state
                .iter()
                .zip(&h)
                .map(|(&s, &hi)| {
                    if hi > 0.0 {
                        1.0
                    } else if hi < 0.0 {
                        -1.0
                    } else {
                        s
                    }
                })
                .collect();

            let changed = next.iter().zip(&state).any(|(a, b)| a != b);
            state = next;
            if !changed {
                outcome = RecallOutcome::Converged {
                    steps: energy_trace.len(),
                };
                break;
            }
        }

        match outcome {
            RecallOutcome::Converged { steps } => self.emit(Event::RecallConverged { steps }),
            RecallOutcome::MaxStepsReached => self.emit(Event::RecallExhausted {
                steps: energy_trace.len(),
            }),
        }

        Ok(RecallResult {
            state,
            energy_trace,
            outcome,
        })
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            symbols: self.vocab.len(),
            patterns_seen: self.patterns_seen,
            crystallized: self.ternary.is_some(),
            weight_mass: self.weights.values().iter().map(|v| v.abs()).sum(),
            ternary_nonzero: self.ternary.as_ref().map(|t| t.nonzero()).unwrap_or(0),
        }
    }
}
