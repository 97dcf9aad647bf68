//! Driving a predictor over a list of resolved branches.

use tracing::trace;

use crate::branch::BranchRecord;
use crate::predictor::BranchPredictor;
use crate::stats::BranchStats;

/// Run a predictor over some records, accumulating statistics.
///
/// Each branch is predicted, scored, and then used to train the predictor
/// before the next branch is considered.
pub fn run(p: &mut impl BranchPredictor, records: &[BranchRecord],
    stat: &mut BranchStats)
{
    for record in records {
        let prediction = p.predict(record.pc);
        trace!(pc = record.pc, ?prediction, outcome = ?record.outcome, "predict");
        stat.update(record, prediction);
        p.train(record.pc, record.outcome);
    }
}

/// Run a predictor over some records and return the number of
/// mispredictions.
pub fn count_mispredictions(p: &mut impl BranchPredictor,
    records: &[BranchRecord]) -> usize
{
    records.iter().filter(|record| {
        let miss = p.predict(record.pc) != record.outcome;
        p.train(record.pc, record.outcome);
        miss
    }).count()
}
