//! Implementations of different branch predictors.

pub mod table;
pub mod counter;
pub mod pht;
pub mod hash;
pub mod simple;
pub mod gshare;
pub mod tournament;
pub mod skewed;
pub mod dispatch;

pub use table::*;
pub use counter::*;
pub use pht::*;
pub use simple::*;
pub use gshare::*;
pub use tournament::*;
pub use skewed::*;
pub use dispatch::*;

use crate::Outcome;

/// Interface to a predictor with some internal state which is only subject to
/// change by the correct branch outcome.
pub trait StatefulPredictor {
    fn name(&self) -> &'static str;

    /// Reset the internal state of the predictor.
    fn reset(&mut self);

    /// Return the current predicted outcome.
    fn predict(&self) -> Outcome;

    /// Update the internal state of the predictor with the correct outcome.
    fn update(&mut self, outcome: Outcome);
}

/// Interface to a conditional branch predictor addressed by program counter.
///
/// Callers must call [BranchPredictor::predict] exactly once for a branch
/// before calling [BranchPredictor::train] with its resolved outcome.
/// Calling `predict` again before `train` returns the same outcome.
pub trait BranchPredictor {
    fn name(&self) -> &'static str;

    /// Return the predictor to its freshly-initialized state.
    fn reset(&mut self);

    /// Predict the direction of the branch at `pc`.
    fn predict(&mut self, pc: u32) -> Outcome;

    /// Update the predictor with the resolved outcome of the branch at `pc`.
    fn train(&mut self, pc: u32, outcome: Outcome);
}
