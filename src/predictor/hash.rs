//! The skewing functions `H` and `H⁻¹` used to decorrelate index bits.
//!
//! See "Trading Conflict and Capacity Aliasing in Conditional Branch
//! Predictors" (Michaud, Seznec and Uhlig, 1997).

/// Shift a word right by one bit, filling the top bit with the XOR of the
/// old least- and most-significant bits.
pub fn h(x: u32) -> u32 {
    let lsb = x & 1;
    let msb = x >> 31;
    (x >> 1) | ((lsb ^ msb) << 31)
}

/// The inverse of [h]: shift a word left by one bit, filling bit 0 with the
/// XOR of the two most-significant bits.
///
/// The two top bits of the input are the old most-significant bit and the
/// XOR of the old least- and most-significant bits, so their XOR recovers
/// the bit that [h] shifted out. The classic predictor driver filled bit 0
/// with the old bits 31 and 0 instead, so its Custom results differ.
pub fn h_inverse(x: u32) -> u32 {
    let msb = x >> 31;
    let next = (x >> 30) & 1;
    (x << 1) | (msb ^ next)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0x0000_0000, 0x0000_0000)]
    #[case(0x0000_0001, 0x8000_0000)]
    #[case(0x8000_0000, 0xc000_0000)]
    #[case(0x8000_0001, 0x4000_0000)]
    #[case(0xf000_0000, 0xf800_0000)]
    #[case(0x0000_0006, 0x0000_0003)]
    fn h_known_values(#[case] x: u32, #[case] expected: u32) {
        assert_eq!(h(x), expected);
        assert_eq!(h_inverse(expected), x);
    }

    #[test]
    fn inverse_of_top_nibble() {
        assert_eq!(h_inverse(h(0xf000_0000)), 0xf000_0000);
        assert_eq!(h(h_inverse(0xf000_0000)), 0xf000_0000);
    }

    proptest! {
        #[test]
        fn inverse_pair(x in any::<u32>()) {
            prop_assert_eq!(h_inverse(h(x)), x);
            prop_assert_eq!(h(h_inverse(x)), x);
        }
    }
}
