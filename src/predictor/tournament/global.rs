
use crate::Outcome;
use crate::history::*;
use crate::predictor::*;

/// A predictor indexed only by global history.
#[derive(Clone, Debug)]
pub struct GlobalPredictor {
    /// Global history, kept to the width of the table
    ghr: HistoryRegister,

    /// Counters, indexed by global history
    bht: CounterTable,
}
impl GlobalPredictor {
    pub fn new(history_bits: u32) -> Self {
        Self {
            ghr: HistoryRegister::new(history_bits),
            bht: CounterTable::new(history_bits, SaturatingCounter::WeaklyNotTaken),
        }
    }

    pub fn history(&self) -> &HistoryRegister { &self.ghr }
    pub fn table(&self) -> &CounterTable { &self.bht }
    #[cfg(test)]
    pub(crate) fn table_mut(&mut self) -> &mut CounterTable { &mut self.bht }

    pub fn predict(&self) -> Outcome {
        self.bht.counter(self.ghr.data()).predict()
    }

    pub fn update(&mut self, outcome: Outcome) {
        self.bht.counter_mut(self.ghr.data()).update(outcome);
        self.ghr.push(outcome);
    }

    pub fn reset(&mut self) {
        self.ghr.reset();
        self.bht.reset();
    }
}
