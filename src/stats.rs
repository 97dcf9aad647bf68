//! Helpers for collecting statistics.

use std::collections::*;
use bitvec::prelude::*;
use itertools::*;
use serde::Serialize;

use crate::branch::*;

/// Container for recording simple statistics while evaluating some model.
#[derive(Debug, Default)]
pub struct BranchStats {
    /// Per-branch statistics (indexed by program counter value).
    pub data: BTreeMap<u32, BranchData>,

    /// Number of correct predictions
    pub global_hits: usize,

    /// Number of times any branch instruction was executed
    pub global_brns: usize,
}
impl BranchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the global hit rate.
    pub fn hit_rate(&self) -> f64 {
        if self.global_brns == 0 { return 0.0; }
        self.global_hits as f64 / self.global_brns as f64
    }

    /// Return the global miss rate as a percentage.
    pub fn miss_rate_percent(&self) -> f64 {
        if self.global_brns == 0 { return 0.0; }
        100.0 * self.global_miss() as f64 / self.global_brns as f64
    }

    /// Return the global hit count.
    pub fn global_hits(&self) -> usize { self.global_hits }

    /// Return the global miss count.
    pub fn global_miss(&self) -> usize { self.global_brns - self.global_hits }

    /// Return the total branch count.
    pub fn global_brns(&self) -> usize { self.global_brns }

    /// Update global and per-branch statistics with a prediction for
    /// some resolved branch.
    pub fn update(&mut self, record: &BranchRecord, prediction: Outcome) {
        let hit = prediction == record.outcome;
        self.global_brns += 1;
        if hit { self.global_hits += 1; }

        let data = self.get_mut(record.pc);
        data.occ += 1;
        data.pat.push(record.outcome.into());
        if hit { data.hits += 1; }
    }

    /// Returns a reference to data collected for a particular branch.
    pub fn get(&self, pc: u32) -> Option<&BranchData> {
        self.data.get(&pc)
    }

    /// Returns a mutable reference to data collected for a particular branch.
    /// Creates a new entry if one doesn't already exist.
    pub fn get_mut(&mut self, pc: u32) -> &mut BranchData {
        self.data.entry(pc).or_default()
    }

    /// Returns the number of unique observed branch instructions.
    pub fn num_unique_branches(&self) -> usize {
        self.data.len()
    }

    /// Returns up to `n` of the most frequently executed branches whose hit
    /// rate is at or below 55%.
    pub fn get_low_rate_branches(&self, n: usize)
        -> Vec<(u32, &BranchData)>
    {
        self.data.iter()
            .filter(|(_, s)| s.hit_rate() <= 0.55)
            .sorted_by(|x, y| x.1.occ.cmp(&y.1.occ).then(y.0.cmp(x.0)))
            .rev()
            .take(n)
            .map(|(pc, s)| (*pc, s))
            .collect()
    }

    /// Summarize these statistics.
    pub fn report(&self, predictor: &str) -> Report {
        Report {
            predictor: predictor.to_string(),
            branches: self.global_brns,
            incorrect: self.global_miss(),
            misprediction_rate: self.miss_rate_percent(),
            unique_branches: self.num_unique_branches(),
        }
    }
}

/// Container for per-branch statistics.
#[derive(Debug, Default)]
pub struct BranchData {
    /// Number of times this branch was encountered.
    pub occ: usize,

    /// Number of correct predictions for this branch.
    pub hits: usize,

    /// Record of all observed outcomes for this branch.
    pub pat: BitVec,
}
impl BranchData {
    /// Return the hit rate for this branch.
    pub fn hit_rate(&self) -> f64 {
        if self.occ == 0 { return 0.0; }
        self.hits as f64 / self.occ as f64
    }

    pub fn times_taken(&self) -> usize {
        self.pat.count_ones()
    }

    /// The most recent (up to 64) outcomes, oldest first.
    pub fn recent_outcomes(&self) -> String {
        let start = self.pat.len().saturating_sub(64);
        self.pat[start..].iter().by_vals()
            .map(|b| if b { '1' } else { '0' })
            .collect()
    }
}

/// A summary of a single run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub predictor: String,
    pub branches: usize,
    pub incorrect: usize,

    /// Percentage of branches that were mispredicted
    pub misprediction_rate: f64,

    pub unique_branches: usize,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Branches:        {:10}", self.branches)?;
        writeln!(f, "Incorrect:       {:10}", self.incorrect)?;
        write!(f, "Misprediction Rate: {:7.3}", self.misprediction_rate)
    }
}
