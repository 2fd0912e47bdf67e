//! Read-only lifecycle observation.
//!
//! The engines never print. Collaborators that want progress reporting
//! install an event hook and route events wherever they like; with no hook
//! installed the engines are silent and pay no per-event cost beyond a
//! branch.

/// Lifecycle events emitted at well-defined points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A training call was accepted (patterns validated, not yet absorbed).
    TrainingStarted { patterns: usize },
    /// A training call finished; `total` counts patterns across all calls.
    TrainingFinished { patterns: usize, total: usize },
    /// Liquid weights were frozen into the ternary matrix.
    /// Payload reports the storage density change.
    Crystallized { float_bits: usize, ternary_bits: usize },
    /// Recall reached an exact fixed point after `steps` updates.
    RecallConverged { steps: usize },
    /// Recall exhausted its iteration budget without a fixed point.
    RecallExhausted { steps: usize },
}

/// Callback invoked synchronously as events occur.
pub type EventHook = Box<dyn FnMut(&Event) + Send>;
