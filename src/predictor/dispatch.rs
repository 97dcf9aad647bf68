
use crate::Outcome;
use crate::predictor::*;

/// A predictor selected once by configuration.
///
/// Each variant carries only the tables its scheme needs.
#[derive(Clone, Debug)]
pub enum Predictor {
    Static(StaticPredictor),
    Gshare(GsharePredictor),
    Tournament(TournamentPredictor),
    Custom(SkewedPredictor),
}

impl Predictor {
    fn inner(&self) -> &dyn BranchPredictor {
        match self {
            Self::Static(p) => p,
            Self::Gshare(p) => p,
            Self::Tournament(p) => p,
            Self::Custom(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn BranchPredictor {
        match self {
            Self::Static(p) => p,
            Self::Gshare(p) => p,
            Self::Tournament(p) => p,
            Self::Custom(p) => p,
        }
    }
}

impl BranchPredictor for Predictor {
    fn name(&self) -> &'static str { self.inner().name() }
    fn reset(&mut self) { self.inner_mut().reset() }
    fn predict(&mut self, pc: u32) -> Outcome { self.inner_mut().predict(pc) }
    fn train(&mut self, pc: u32, outcome: Outcome) { self.inner_mut().train(pc, outcome) }
}

impl From<StaticPredictor> for Predictor {
    fn from(p: StaticPredictor) -> Self { Self::Static(p) }
}
impl From<GsharePredictor> for Predictor {
    fn from(p: GsharePredictor) -> Self { Self::Gshare(p) }
}
impl From<TournamentPredictor> for Predictor {
    fn from(p: TournamentPredictor) -> Self { Self::Tournament(p) }
}
impl From<SkewedPredictor> for Predictor {
    fn from(p: SkewedPredictor) -> Self { Self::Custom(p) }
}
