//! Implementation of a 2-bit saturating counter.

use crate::Outcome;
use crate::predictor::StatefulPredictor;

/// A 2-bit saturating counter used to follow the behavior of a branch.
///
/// The two low states predict not-taken and the two high states predict
/// taken. Updates move the counter by one level and clamp at either end.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SaturatingCounter {
    StronglyNotTaken = 0,
    #[default]
    WeaklyNotTaken = 1,
    WeaklyTaken = 2,
    StronglyTaken = 3,
}
impl SaturatingCounter {
    /// The ordinal level of this counter, in `0..=3`.
    pub fn value(self) -> u8 { self as u8 }

    pub fn from_value(x: u8) -> Option<Self> {
        match x {
            0 => Some(Self::StronglyNotTaken),
            1 => Some(Self::WeaklyNotTaken),
            2 => Some(Self::WeaklyTaken),
            3 => Some(Self::StronglyTaken),
            _ => None,
        }
    }

    /// Move one level toward [`SaturatingCounter::StronglyTaken`].
    pub fn increment(&mut self) {
        *self = match self {
            Self::StronglyNotTaken => Self::WeaklyNotTaken,
            Self::WeaklyNotTaken => Self::WeaklyTaken,
            Self::WeaklyTaken | Self::StronglyTaken => Self::StronglyTaken,
        };
    }

    /// Move one level toward [`SaturatingCounter::StronglyNotTaken`].
    pub fn decrement(&mut self) {
        *self = match self {
            Self::StronglyTaken => Self::WeaklyTaken,
            Self::WeaklyTaken => Self::WeaklyNotTaken,
            Self::WeaklyNotTaken | Self::StronglyNotTaken => Self::StronglyNotTaken,
        };
    }

    /// Returns 'true' when the counter is in one of the two strong states.
    pub fn is_strong(self) -> bool {
        matches!(self, Self::StronglyNotTaken | Self::StronglyTaken)
    }
}

impl StatefulPredictor for SaturatingCounter {
    fn name(&self) -> &'static str { "SaturatingCounter" }

    fn predict(&self) -> Outcome {
        match self {
            Self::StronglyNotTaken | Self::WeaklyNotTaken => Outcome::N,
            Self::WeaklyTaken | Self::StronglyTaken => Outcome::T,
        }
    }

    fn reset(&mut self) { *self = Self::default(); }

    fn update(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::T => self.increment(),
            Outcome::N => self.decrement(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use SaturatingCounter::*;

    #[test]
    fn saturates_at_the_ends() {
        let mut c = StronglyTaken;
        c.update(Outcome::T);
        assert_eq!(c, StronglyTaken);
        c.update(Outcome::N);
        assert_eq!(c, WeaklyTaken);

        let mut c = StronglyNotTaken;
        c.update(Outcome::N);
        assert_eq!(c, StronglyNotTaken);
        c.update(Outcome::T);
        assert_eq!(c, WeaklyNotTaken);
    }

    #[test]
    fn read_rule() {
        assert_eq!(StronglyNotTaken.predict(), Outcome::N);
        assert_eq!(WeaklyNotTaken.predict(), Outcome::N);
        assert_eq!(WeaklyTaken.predict(), Outcome::T);
        assert_eq!(StronglyTaken.predict(), Outcome::T);
    }

    #[test]
    fn reset_to_weakly_not_taken() {
        let mut c = StronglyTaken;
        c.reset();
        assert_eq!(c, WeaklyNotTaken);
        assert!(!c.is_strong());
    }

    proptest! {
        #[test]
        fn stays_in_range(init in 0u8..4, updates in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut c = SaturatingCounter::from_value(init).unwrap();
            for taken in updates {
                let before = c.value();
                c.update(Outcome::from(taken));
                prop_assert!(c.value() <= 3);
                prop_assert!(before.abs_diff(c.value()) <= 1);
            }
        }
    }
}
