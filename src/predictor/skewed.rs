//! A three-bank "skewed" predictor.
//!
//! Each bank is indexed with a different hash of the program counter and its
//! own history, so two branches that alias in one bank are unlikely to alias
//! in the others. The banks vote and the majority wins.
//!
//! See "Trading Conflict and Capacity Aliasing in Conditional Branch
//! Predictors" (Michaud, Seznec and Uhlig, 1997).

use crate::Outcome;
use crate::history::*;
use crate::predictor::*;
use crate::predictor::hash::{ h, h_inverse };

/// Extra index bits given to each bank, relative to the configured global
/// history width.
pub const SKEWED_EXTRA_INDEX_BITS: u32 = 4;

/// A function used to create an index from a program counter value and a
/// history register.
pub type SkewIndexFn = fn(pc: u32, history: u32) -> u32;

pub fn skew_index_0(pc: u32, history: u32) -> u32 {
    h(pc) ^ h_inverse(history) ^ history
}

pub fn skew_index_1(pc: u32, history: u32) -> u32 {
    h(pc) ^ h_inverse(history) ^ pc
}

pub fn skew_index_2(pc: u32, history: u32) -> u32 {
    h_inverse(pc) ^ h(history) ^ pc
}

/// One bank of the skewed predictor.
#[derive(Clone, Debug)]
pub struct SkewedBank {
    /// History for this bank only
    history: HistoryRegister,

    /// Table of counters
    bht: CounterTable,

    /// Index function
    index_fn: SkewIndexFn,
}
impl SkewedBank {
    pub fn new(index_bits: u32, index_fn: SkewIndexFn) -> Self {
        Self {
            history: HistoryRegister::full(),
            bht: CounterTable::new(index_bits, SaturatingCounter::WeaklyNotTaken),
            index_fn,
        }
    }

    pub fn history(&self) -> &HistoryRegister { &self.history }
    pub fn table(&self) -> &CounterTable { &self.bht }

    /// Return the (masked) index selected by `pc` and the current history.
    pub fn index(&self, pc: u32) -> u32 {
        self.bht.mask((self.index_fn)(pc, self.history.data()))
    }

    pub fn predict(&self, pc: u32) -> Outcome {
        self.bht.counter(self.index(pc)).predict()
    }

    pub fn update(&mut self, pc: u32, outcome: Outcome) {
        let idx = self.index(pc);
        self.bht.counter_mut(idx).update(outcome);
        self.history.push(outcome);
    }

    pub fn reset(&mut self) {
        self.history.reset();
        self.bht.reset();
    }
}

#[derive(Clone, Debug)]
pub struct SkewedPredictor {
    banks: [SkewedBank; 3],
}
impl SkewedPredictor {
    /// Create a predictor whose banks each have
    /// `2^(ghistory_bits + SKEWED_EXTRA_INDEX_BITS)` entries.
    pub fn new(ghistory_bits: u32) -> Self {
        let index_bits = ghistory_bits + SKEWED_EXTRA_INDEX_BITS;
        Self {
            banks: [
                SkewedBank::new(index_bits, skew_index_0),
                SkewedBank::new(index_bits, skew_index_1),
                SkewedBank::new(index_bits, skew_index_2),
            ],
        }
    }

    pub fn banks(&self) -> &[SkewedBank; 3] { &self.banks }

    /// Return the number of banks voting 'taken' for the branch at `pc`.
    pub fn votes(&self, pc: u32) -> u32 {
        self.banks.iter().map(|b| b.predict(pc).bit()).sum()
    }

    /// Compute a prediction without changing any state.
    ///
    /// Predicts 'taken' when at least two banks vote for it. The classic
    /// driver required all three, so its Custom numbers will not reproduce.
    pub fn lookup(&self, pc: u32) -> Outcome {
        Outcome::from(self.votes(pc) >= 2)
    }
}

impl BranchPredictor for SkewedPredictor {
    fn name(&self) -> &'static str { "Custom" }

    fn reset(&mut self) {
        self.banks.iter_mut().for_each(|b| b.reset());
    }

    fn predict(&mut self, pc: u32) -> Outcome { self.lookup(pc) }

    fn train(&mut self, pc: u32, outcome: Outcome) {
        for bank in self.banks.iter_mut() {
            bank.update(pc, outcome);
        }
    }
}
