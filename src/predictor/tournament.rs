//! The "tournament" predictor.
//!
//! A local and a global predictor run side-by-side, and a table of
//! counters indexed by global history learns which of them to trust.
//! See "The Alpha 21264 Microprocessor" (Kessler, 1999).

pub mod local;
pub mod global;
pub use local::*;
pub use global::*;

use crate::Outcome;
use crate::predictor::*;

/// Identifies which component provided a tournament prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TournamentChoice {
    Local,
    #[default]
    Global,
}

/// The result of a lookup in a [TournamentPredictor].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TournamentPrediction {
    /// Predicted direction from the local component
    pub local: Outcome,

    /// Predicted direction from the global component
    pub global: Outcome,

    /// The component selected by the chooser
    pub choice: TournamentChoice,

    /// The final predicted direction
    pub outcome: Outcome,
}
impl Default for TournamentPrediction {
    fn default() -> Self {
        Self {
            local: Outcome::N,
            global: Outcome::N,
            choice: TournamentChoice::Global,
            outcome: Outcome::N,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TournamentPredictor {
    local: LocalPredictor,
    global: GlobalPredictor,

    /// Counters indexed by global history. The two not-taken states select
    /// the global component, and the two taken states select the local one.
    chooser: CounterTable,

    /// The most recent lookup, compared against the outcome during training.
    last: TournamentPrediction,
}
impl TournamentPredictor {
    pub fn new(ghistory_bits: u32, lhistory_bits: u32, pc_index_bits: u32)
        -> Self
    {
        Self {
            local: LocalPredictor::new(pc_index_bits, lhistory_bits),
            global: GlobalPredictor::new(ghistory_bits),
            chooser: CounterTable::new(ghistory_bits, SaturatingCounter::WeaklyNotTaken),
            last: TournamentPrediction::default(),
        }
    }

    pub fn local(&self) -> &LocalPredictor { &self.local }
    pub fn global(&self) -> &GlobalPredictor { &self.global }
    pub fn chooser(&self) -> &CounterTable { &self.chooser }

    /// The chooser counter for the current global history.
    pub fn chooser_state(&self) -> SaturatingCounter {
        self.chooser.counter(self.global.history().data())
    }

    /// Compute a prediction without changing any state.
    pub fn lookup(&self, pc: u32) -> TournamentPrediction {
        let local = self.local.predict(pc);
        let global = self.global.predict();
        let choice = match self.chooser_state().predict() {
            Outcome::N => TournamentChoice::Global,
            Outcome::T => TournamentChoice::Local,
        };
        let outcome = match choice {
            TournamentChoice::Global => global,
            TournamentChoice::Local => local,
        };
        TournamentPrediction { local, global, choice, outcome }
    }
}

impl BranchPredictor for TournamentPredictor {
    fn name(&self) -> &'static str { "Tournament" }

    fn reset(&mut self) {
        self.local.reset();
        self.global.reset();
        self.chooser.reset();
        self.last = TournamentPrediction::default();
    }

    fn predict(&mut self, pc: u32) -> Outcome {
        self.last = self.lookup(pc);
        self.last.outcome
    }

    fn train(&mut self, pc: u32, outcome: Outcome) {
        // The chooser is only trained when the components disagree, and must
        // be indexed with global history from before this outcome.
        let last = self.last;
        if last.local != last.global {
            let toward = if last.global == outcome { Outcome::N } else { Outcome::T };
            self.chooser.counter_mut(self.global.history().data()).update(toward);
        }
        self.local.update(pc, outcome);
        self.global.update(outcome);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fill(table: &mut CounterTable, state: SaturatingCounter) {
        for idx in 0..table.size() {
            *table.get_entry_mut(idx) = state;
        }
    }

    #[test]
    fn chooser_converges_to_global() {
        let mut p = TournamentPredictor::new(2, 2, 2);
        fill(&mut p.chooser, SaturatingCounter::StronglyTaken);

        // The local component is pinned to 'not-taken' while the branch is
        // always taken, so the global component wins every disagreement.
        let mut disagreements = 0;
        for _ in 0..16 {
            fill(p.local.table_mut(), SaturatingCounter::StronglyNotTaken);
            let _ = p.predict(0x100);
            if p.last.local != p.last.global {
                disagreements += 1;
            }
            p.train(0x100, Outcome::T);
        }

        assert!(disagreements >= 3);
        assert_eq!(p.chooser_state(), SaturatingCounter::StronglyNotTaken);
        let pred = p.lookup(0x100);
        assert_eq!(pred.choice, TournamentChoice::Global);
        assert_eq!(pred.outcome, Outcome::T);
    }

    #[test]
    fn chooser_moves_to_local_when_local_is_right() {
        let mut p = TournamentPredictor::new(2, 2, 2);
        for _ in 0..16 {
            fill(p.global.table_mut(), SaturatingCounter::StronglyNotTaken);
            let _ = p.predict(0x100);
            p.train(0x100, Outcome::T);
        }

        assert_eq!(p.chooser_state(), SaturatingCounter::StronglyTaken);
        let pred = p.lookup(0x100);
        assert_eq!(pred.choice, TournamentChoice::Local);
        assert_eq!(pred.local, Outcome::T);
    }

    #[test]
    fn chooser_untouched_while_components_agree() {
        let mut p = TournamentPredictor::new(4, 4, 4);
        for _ in 0..3 {
            let pred = p.lookup(0x20);
            assert_eq!(pred.local, pred.global);
            let _ = p.predict(0x20);
            p.train(0x20, Outcome::T);
        }
        for idx in 0..p.chooser().size() {
            assert_eq!(*p.chooser().get_entry(idx), SaturatingCounter::WeaklyNotTaken);
        }
    }

    #[test]
    fn histories_are_masked() {
        let mut p = TournamentPredictor::new(3, 2, 4);
        for _ in 0..10 {
            let _ = p.predict(0x5);
            p.train(0x5, Outcome::T);
        }
        assert_eq!(p.global().history().data(), 0b111);
        assert_eq!(p.local().patterns().pattern(0x5), 0b11);
        assert_eq!(p.local().patterns().pattern(0x6), 0);
    }

    #[test]
    fn predict_is_idempotent() {
        let mut p = TournamentPredictor::new(4, 4, 4);
        for i in 0..8 {
            let _ = p.predict(i);
            p.train(i, Outcome::from(i % 3 == 0));
        }
        let first = p.predict(0x3);
        assert_eq!(p.predict(0x3), first);
        assert_eq!(p.lookup(0x3).outcome, first);
    }
}
