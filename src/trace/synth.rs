//! Generating synthetic branch traces.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::branch::*;
use crate::trace::Trace;

/// A pre-determined pattern of outcomes associated with a conditional branch.
#[derive(Clone, Debug, PartialEq)]
pub enum BranchPattern {
    /// A branch whose outcome is always 'taken'.
    AlwaysTaken,

    /// A branch whose outcome is always 'not-taken'.
    NeverTaken,

    /// A branch whose outcome is only periodically "taken".
    /// Otherwise, the branch is "not-taken" by default.
    TakenPeriodic(usize),

    /// A branch whose outcome is only periodically "not-taken".
    /// Otherwise, the branch is "taken" by default.
    NotTakenPeriodic(usize),

    /// A branch with an arbitrary repeating pattern of outcomes.
    Pattern(Vec<Outcome>),

    /// A branch which is taken with some probability.
    Biased(f64),
}
impl BranchPattern {
    /// Given the number of previous executions of the branch, generate an
    /// outcome.
    pub fn outcome(&self, ctr: usize, rng: &mut impl Rng) -> Outcome {
        match self {
            Self::AlwaysTaken => Outcome::T,
            Self::NeverTaken => Outcome::N,
            Self::TakenPeriodic(p) => {
                if ctr % p == (p - 1) { Outcome::T } else { Outcome::N }
            },
            Self::NotTakenPeriodic(p) => {
                if ctr % p == (p - 1) { Outcome::N } else { Outcome::T }
            },
            Self::Pattern(pat) => pat[ctr % pat.len()],
            Self::Biased(prob) => Outcome::from(rng.gen_bool(*prob)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticBranch {
    pub pc: u32,
    pub pattern: BranchPattern,
}

/// Builds a trace by repeatedly executing a list of branches in order,
/// like the body of a loop.
#[derive(Debug)]
pub struct TraceGenerator {
    branches: Vec<SyntheticBranch>,
    rng: StdRng,
}
impl TraceGenerator {
    /// Create a generator. Random patterns are drawn from a generator
    /// seeded with `seed`, so the same seed always yields the same trace.
    pub fn new(seed: u64) -> Self {
        Self {
            branches: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Add a branch to the end of the loop body.
    pub fn add_branch(&mut self, pc: u32, pattern: BranchPattern) -> &mut Self {
        if let BranchPattern::TakenPeriodic(p) | BranchPattern::NotTakenPeriodic(p) = pattern {
            assert!(p > 0, "period must be non-zero");
        }
        if let BranchPattern::Pattern(ref pat) = pattern {
            assert!(!pat.is_empty(), "pattern must be non-empty");
        }
        if let BranchPattern::Biased(prob) = pattern {
            assert!((0.0..=1.0).contains(&prob), "probability must be within [0, 1]");
        }
        self.branches.push(SyntheticBranch { pc, pattern });
        self
    }

    /// Add `num` branches at random addresses with a random mix of patterns.
    pub fn add_random_branches(&mut self, num: usize) -> &mut Self {
        for _ in 0..num {
            let pc = self.rng.gen::<u32>() & !0b11;
            let pattern = match self.rng.gen_range(0..6) {
                0 => BranchPattern::AlwaysTaken,
                1 => BranchPattern::NeverTaken,
                2 => BranchPattern::TakenPeriodic(self.rng.gen_range(2..16)),
                3 => BranchPattern::NotTakenPeriodic(self.rng.gen_range(2..16)),
                4 => {
                    let len = self.rng.gen_range(2..12);
                    let pat = (0..len).map(|_| Outcome::from(self.rng.gen::<bool>()))
                        .collect();
                    BranchPattern::Pattern(pat)
                },
                _ => BranchPattern::Biased(self.rng.gen_range(0.0..1.0)),
            };
            self.add_branch(pc, pattern);
        }
        self
    }

    pub fn branches(&self) -> &[SyntheticBranch] { &self.branches }

    /// Execute the loop body `iters` times and return the resulting trace.
    pub fn generate(&mut self, name: impl ToString, iters: usize) -> Trace {
        let mut data = Vec::with_capacity(iters * self.branches.len());
        for ctr in 0..iters {
            for brn in self.branches.iter() {
                let outcome = brn.pattern.outcome(ctr, &mut self.rng);
                data.push(BranchRecord::new(brn.pc, outcome));
            }
        }
        Trace::new(name, data)
    }
}
