//! Implementation of a pattern history table (PHT) of local histories.

use crate::Outcome;
use crate::history::*;
use crate::predictor::*;

/// A table of per-branch [HistoryRegister] indexed by the program counter.
///
/// Each entry records the most recent outcomes of the branches that map to
/// it. The recorded pattern is itself used as an index into some other
/// table of counters.
#[derive(Clone, Debug)]
pub struct PatternHistoryTable {
    /// Table of local histories
    data: Vec<HistoryRegister>,

    /// Number of low program counter bits used to select an entry
    pc_index_bits: u32,
}
impl PatternHistoryTable {
    pub fn new(pc_index_bits: u32, history_bits: u32) -> Self {
        let size = 1usize << pc_index_bits;
        Self {
            data: vec![HistoryRegister::new(history_bits); size],
            pc_index_bits,
        }
    }

    pub fn pc_index_bits(&self) -> u32 { self.pc_index_bits }

    /// Return the local history pattern for the branch at `pc`.
    pub fn pattern(&self, pc: u32) -> u32 {
        self.get_entry(self.get_index(pc)).data()
    }

    /// Record an outcome in the local history for the branch at `pc`.
    pub fn push(&mut self, pc: u32, outcome: Outcome) {
        let idx = self.get_index(pc);
        self.get_entry_mut(idx).push(outcome);
    }

    /// Clear every local history.
    pub fn reset(&mut self) {
        self.data.iter_mut().for_each(|h| h.reset());
    }
}

impl PredictorTable for PatternHistoryTable {
    type Entry = HistoryRegister;

    fn size(&self) -> usize { self.data.len() }

    fn get_entry(&self, idx: usize) -> &HistoryRegister {
        let index = idx & self.index_mask();
        &self.data[index]
    }

    fn get_entry_mut(&mut self, idx: usize) -> &mut HistoryRegister {
        let index = idx & self.index_mask();
        &mut self.data[index]
    }
}
