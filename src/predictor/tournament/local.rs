
use crate::Outcome;
use crate::predictor::*;

/// A two-level predictor using per-branch (local) history.
///
/// The low bits of the program counter select a local history pattern,
/// and that pattern selects a counter.
#[derive(Clone, Debug)]
pub struct LocalPredictor {
    /// Local history patterns, indexed by program counter
    pht: PatternHistoryTable,

    /// Counters, indexed by local history pattern
    bht: CounterTable,
}
impl LocalPredictor {
    pub fn new(pc_index_bits: u32, history_bits: u32) -> Self {
        Self {
            pht: PatternHistoryTable::new(pc_index_bits, history_bits),
            bht: CounterTable::new(history_bits, SaturatingCounter::WeaklyNotTaken),
        }
    }

    pub fn patterns(&self) -> &PatternHistoryTable { &self.pht }
    pub fn table(&self) -> &CounterTable { &self.bht }
    #[cfg(test)]
    pub(crate) fn table_mut(&mut self) -> &mut CounterTable { &mut self.bht }

    pub fn predict(&self, pc: u32) -> Outcome {
        self.bht.counter(self.pht.pattern(pc)).predict()
    }

    pub fn update(&mut self, pc: u32, outcome: Outcome) {
        let pattern = self.pht.pattern(pc);
        self.bht.counter_mut(pattern).update(outcome);
        self.pht.push(pc, outcome);
    }

    pub fn reset(&mut self) {
        self.pht.reset();
        self.bht.reset();
    }
}
