//! Conditional branch direction predictors.
//!
//! Every predictor is driven the same way: call
//! [`BranchPredictor::predict`] with the program counter of a branch, then
//! [`BranchPredictor::train`] once its outcome is known.

pub mod branch;
pub mod history;
pub mod predictor;
pub mod config;
pub mod trace;
pub mod stats;
pub mod sim;

pub use branch::*;
pub use history::*;
pub use predictor::*;
pub use config::*;
pub use trace::*;
