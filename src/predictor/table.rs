//! Types for implementing a table of predictors.

use crate::history::low_mask;
use crate::predictor::counter::*;

/// Interface to a table of predictors.
pub trait PredictorTable: Sized {
    /// The type of entry in the table.
    type Entry;

    /// Returns the number of entries in the table.
    fn size(&self) -> usize;

    /// Given some (already hashed) input, return the corresponding index
    /// into the table.
    fn get_index(&self, input: u32) -> usize {
        (input as usize) & self.index_mask()
    }

    /// Returns a reference to an entry in the table.
    fn get_entry(&self, idx: usize) -> &Self::Entry;

    /// Returns a mutable reference to an entry in the table.
    fn get_entry_mut(&mut self, idx: usize) -> &mut Self::Entry;

    /// Returns a bitmask corresponding to the number of entries in the table.
    fn index_mask(&self) -> usize {
        assert!(self.size().is_power_of_two());
        self.size() - 1
    }
}

/// A table of [SaturatingCounter] with `2^index_bits` entries.
///
/// Used both as a branch history table (BHT) and as the chooser in the
/// tournament predictor.
#[derive(Clone, Debug)]
pub struct CounterTable {
    /// Table of counters
    data: Vec<SaturatingCounter>,

    /// Number of bits used to index the table
    index_bits: u32,

    /// Initial state of every counter
    init: SaturatingCounter,
}
impl CounterTable {
    pub fn new(index_bits: u32, init: SaturatingCounter) -> Self {
        let size = 1usize << index_bits;
        Self {
            data: vec![init; size],
            index_bits,
            init,
        }
    }

    pub fn index_bits(&self) -> u32 { self.index_bits }

    /// Mask some input down to the width of the table.
    pub fn mask(&self, input: u32) -> u32 { input & low_mask(self.index_bits) }

    /// Return every counter to its initial state.
    pub fn reset(&mut self) {
        self.data.fill(self.init);
    }

    /// Returns the counter selected by some (unmasked) input.
    pub fn counter(&self, input: u32) -> SaturatingCounter {
        *self.get_entry(self.get_index(input))
    }

    /// Returns a mutable reference to the counter selected by some
    /// (unmasked) input.
    pub fn counter_mut(&mut self, input: u32) -> &mut SaturatingCounter {
        let idx = self.get_index(input);
        self.get_entry_mut(idx)
    }
}

impl PredictorTable for CounterTable {
    type Entry = SaturatingCounter;

    fn size(&self) -> usize { self.data.len() }

    fn get_entry(&self, idx: usize) -> &SaturatingCounter {
        let index = idx & self.index_mask();
        &self.data[index]
    }

    fn get_entry_mut(&mut self, idx: usize) -> &mut SaturatingCounter {
        let index = idx & self.index_mask();
        &mut self.data[index]
    }
}
