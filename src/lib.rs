//! # resona
//!
//! Semantic resonance engines over a fixed symbol vocabulary.
//!
//! Words are modeled as nodes in two alternative numeric dynamical systems,
//! and convergence/synchronization behavior stands in for semantic
//! relatedness:
//!
//! - [`ternary::TernaryNet`] — an associative memory that learns correlations
//!   via Hebbian accumulation, crystallizes its weights into a ternary
//!   {-1, 0, 1} matrix, and recovers stored patterns through synchronous
//!   sign-update dynamics with an energy trace.
//! - [`resonance::Resonator`] — a phase-oscillator network whose pairwise
//!   coupling strengths encode association; after integrating the coupled
//!   dynamics, the steady-state phase correlation with a queried concept
//!   yields per-symbol resonance scores.
//!
//! The two pipelines are independent realizations of the same contract and
//! never share mutable state.
//!
//! ## Quick Start
//!
//! ```
//! use resona::prelude::*;
//!
//! let vocab = Vocabulary::from_names(["king", "queen"]);
//!
//! // Associative memory: train, crystallize, recall.
//! let mut net = TernaryNet::new(vocab.clone());
//! net.train(&[vec![1.0, -1.0]]).unwrap();
//! net.crystallize();
//! let recall = net.recall(&[1.0, -1.0], 10).unwrap();
//! assert!(matches!(recall.outcome, RecallOutcome::Converged { .. }));
//!
//! // Oscillator resonance: couple, integrate, score.
//! let mut resonator = Resonator::new(vocab, ResonatorConfig::default());
//! resonator.build_coupling(&[("king", "queen", 5.0)]).unwrap();
//! let (history, scores) = resonator.run("king", 200, Some(7)).unwrap();
//! assert_eq!(history.steps(), 200);
//! assert!(scores.contains_key("queen"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serialization of public data types, so downstream
//!   exporters can emit the adjacency matrix, phase history, and score maps
//! - `parallel`: parallel oscillator integration via rayon
//!
//! ## Modules
//!
//! - [`vocab`]: symbol name <-> dense index mapping
//! - [`ternary`]: Hebbian accumulation, ternary quantization, recall
//! - [`resonance`]: coupling graph, Kuramoto integration, resonance scoring
//! - [`observer`]: optional lifecycle event hook

#[path = "core/error.rs"]
pub mod error;

#[path = "core/matrix.rs"]
pub mod matrix;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/resonance.rs"]
pub mod resonance;

#[path = "core/ternary.rs"]
pub mod ternary;

#[path = "core/vocab.rs"]
pub mod vocab;

pub mod observer;

/// Prelude module for convenient imports.
///
/// ```
/// use resona::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{SquareMatrix, TernaryMatrix};
    pub use crate::observer::{Event, EventHook};
    pub use crate::resonance::{PhaseHistory, Resonator, ResonatorConfig};
    pub use crate::ternary::{Diagnostics, RecallOutcome, RecallResult, TernaryNet};
    pub use crate::vocab::{SymbolId, Vocabulary};
}
