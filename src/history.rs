
use bitvec::prelude::*;
use crate::branch::Outcome;

/// Returns a mask selecting the low `bits` bits of a 32-bit word.
pub fn low_mask(bits: u32) -> u32 {
    if bits >= u32::BITS { u32::MAX } else { (1 << bits) - 1 }
}

/// A shift register holding the most recent branch outcomes.
///
/// The newest outcome is always bit 0. Only the low `len` bits are retained;
/// older outcomes are discarded as new ones are shifted in. A 32-bit register
/// keeps the whole word, which matters for predictors that hash the upper
/// bits of history.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HistoryRegister {
    data: u32,
    len: u32,
}

// NOTE: This presents the bits in a format where the leftmost bit is the
// oldest outcome (index n) and the rightmost bit is the newest (index 0).
impl std::fmt::Display for HistoryRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let x: String = self.data.view_bits::<Lsb0>()[..self.len as usize]
            .iter().by_vals()
            .map(|b| if b { '1' } else { '0' })
            .rev()
            .collect();
        write!(f, "{}", x)
    }
}

impl std::fmt::Debug for HistoryRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HistoryRegister({}b: {})", self.len, self)
    }
}

impl HistoryRegister {
    /// Create a register with the specified length in bits.
    /// All bits in the register are initialized to zero.
    pub fn new(len: u32) -> Self {
        assert!(len > 0 && len <= u32::BITS, "invalid history length {}", len);
        Self { data: 0, len }
    }

    /// Create a register spanning a whole 32-bit word.
    pub fn full() -> Self { Self::new(u32::BITS) }

    pub fn len(&self) -> u32 { self.len }
    pub fn data(&self) -> u32 { self.data }

    /// Shift in the most recent outcome.
    /// The oldest bit falls off the top of the register.
    pub fn push(&mut self, outcome: Outcome) {
        self.data = ((self.data << 1) & low_mask(self.len)) | outcome.bit();
    }

    /// Return the low `bits` bits of history.
    pub fn low_bits(&self, bits: u32) -> u32 {
        self.data & low_mask(bits)
    }

    /// Clear all history.
    pub fn reset(&mut self) { self.data = 0; }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn masks() {
        assert_eq!(low_mask(1), 0b1);
        assert_eq!(low_mask(12), 0xfff);
        assert_eq!(low_mask(32), u32::MAX);
    }

    #[test]
    fn push_discards_old_bits() {
        let mut ghr = HistoryRegister::new(3);
        for o in [Outcome::T, Outcome::N, Outcome::T, Outcome::T] {
            ghr.push(o);
        }
        assert_eq!(ghr.data(), 0b011);
        assert_eq!(ghr.to_string(), "011");
    }

    #[test]
    fn full_register_keeps_whole_word() {
        let mut hr = HistoryRegister::full();
        for _ in 0..33 {
            hr.push(Outcome::T);
        }
        assert_eq!(hr.data(), u32::MAX);
        hr.push(Outcome::N);
        assert_eq!(hr.data(), u32::MAX - 1);
        assert_eq!(hr.low_bits(4), 0b1110);
        hr.reset();
        assert_eq!(hr.data(), 0);
    }
}
