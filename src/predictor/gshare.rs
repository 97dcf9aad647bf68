//! The "gshare" predictor.
//!
//! See "Combining Branch Predictors" (McFarling, 1993).

use crate::Outcome;
use crate::history::*;
use crate::predictor::*;

/// A single table of counters indexed by the program counter XOR'ed with
/// global history.
#[derive(Clone, Debug)]
pub struct GsharePredictor {
    /// Global history. Only the low bits are used to form an index, but the
    /// register keeps a whole word.
    ghr: HistoryRegister,

    /// Table of counters
    bht: CounterTable,
}
impl GsharePredictor {
    pub fn new(history_bits: u32) -> Self {
        Self {
            ghr: HistoryRegister::full(),
            bht: CounterTable::new(history_bits, SaturatingCounter::WeaklyNotTaken),
        }
    }

    pub fn history(&self) -> &HistoryRegister { &self.ghr }
    pub fn table(&self) -> &CounterTable { &self.bht }

    fn index(&self, pc: u32) -> u32 {
        self.bht.mask(self.ghr.data() ^ pc)
    }

    /// Return the predicted outcome without changing any state.
    pub fn lookup(&self, pc: u32) -> Outcome {
        self.bht.counter(self.index(pc)).predict()
    }
}

impl BranchPredictor for GsharePredictor {
    fn name(&self) -> &'static str { "Gshare" }

    fn reset(&mut self) {
        self.ghr.reset();
        self.bht.reset();
    }

    fn predict(&mut self, pc: u32) -> Outcome { self.lookup(pc) }

    fn train(&mut self, pc: u32, outcome: Outcome) {
        let idx = self.index(pc);
        self.bht.counter_mut(idx).update(outcome);
        self.ghr.push(outcome);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn learns_an_always_taken_branch() {
        let mut p = GsharePredictor::new(1);
        assert_eq!(p.predict(0), Outcome::N);

        // The first update lands on entry 0. With a '1' in history, the next
        // two land on entry 1, which reads as taken after one of them.
        p.train(0, Outcome::T);
        assert_eq!(p.predict(0), Outcome::N);
        p.train(0, Outcome::T);
        assert_eq!(p.predict(0), Outcome::T);
        p.train(0, Outcome::T);
        assert_eq!(p.predict(0), Outcome::T);
        assert_eq!(p.table().counter(1), SaturatingCounter::StronglyTaken);
        assert_eq!(p.table().counter(0), SaturatingCounter::WeaklyTaken);
    }

    #[test]
    fn history_is_not_masked_when_stored() {
        let mut p = GsharePredictor::new(2);
        for _ in 0..8 {
            let _ = p.predict(0x40);
            p.train(0x40, Outcome::T);
        }
        assert_eq!(p.history().data(), 0xff);
    }

    #[test]
    fn predict_is_idempotent() {
        let mut p = GsharePredictor::new(4);
        p.train(0x11, Outcome::T);
        p.train(0x11, Outcome::T);
        let first = p.predict(0x13);
        assert_eq!(p.predict(0x13), first);
    }

    #[test]
    fn reset_clears_state() {
        let mut p = GsharePredictor::new(4);
        for _ in 0..4 {
            p.train(0x7, Outcome::T);
        }
        p.reset();
        assert_eq!(p.history().data(), 0);
        assert_eq!(p.predict(0x7), Outcome::N);
    }
}
