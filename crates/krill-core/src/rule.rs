//! Wolfram rule decoding for the 1-D elementary automaton.

use std::fmt;

/// An elementary automaton rule, decoded from its Wolfram number.
///
/// The number's binary representation, read least-significant bit
/// first, gives the output for each of the eight 3-bit neighbourhood
/// patterns `left << 2 | center << 1 | right`:
///
/// ```text
/// 111 110 101 100 011 010 001 000
/// -------------------------------
///  0   0   0   1   1   1   1   0   rule  30
///  0   1   0   1   1   0   1   0   rule  90
///  0   1   1   0   1   1   1   0   rule 110
/// ```
///
/// The constructor takes a `u8`, so the 0–255 range is enforced by the
/// type system; out-of-range input is rejected wherever the number is
/// parsed (the CLI layer), and no runtime validation branch exists here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    number: u8,
    transitions: [bool; 8],
}

impl Rule {
    /// Decode a Wolfram rule number into its transition table.
    pub fn new(number: u8) -> Self {
        let mut transitions = [false; 8];
        for (bit, output) in transitions.iter_mut().enumerate() {
            *output = (number >> bit) & 1 == 1;
        }
        Self {
            number,
            transitions,
        }
    }

    /// The Wolfram number this rule was decoded from.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// The output state for a 3-bit neighbourhood pattern.
    ///
    /// Bits above the low three are ignored.
    pub fn output(&self, pattern: u8) -> bool {
        self.transitions[usize::from(pattern & 0b111)]
    }

    /// Encode a neighbourhood as a 3-bit pattern.
    pub fn pattern(left: bool, center: bool, right: bool) -> u8 {
        (u8::from(left) << 2) | (u8::from(center) << 1) | u8::from(right)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(rule: u8) -> [bool; 8] {
        let r = Rule::new(rule);
        let mut out = [false; 8];
        for (p, slot) in out.iter_mut().enumerate() {
            *slot = r.output(p as u8);
        }
        out
    }

    #[test]
    fn rule_30_transitions() {
        // Patterns 000..111: 0 1 1 1 1 0 0 0
        assert_eq!(
            table(30),
            [false, true, true, true, true, false, false, false]
        );
    }

    #[test]
    fn rule_90_transitions() {
        // Rule 90 is XOR of the two outer neighbours.
        let r = Rule::new(90);
        for p in 0u8..8 {
            let left = p & 0b100 != 0;
            let right = p & 0b001 != 0;
            assert_eq!(r.output(p), left ^ right, "pattern {p:03b}");
        }
    }

    #[test]
    fn rule_110_transitions() {
        assert_eq!(
            table(110),
            [false, true, true, true, false, true, true, false]
        );
    }

    #[test]
    fn boundary_rules() {
        assert_eq!(table(0), [false; 8]);
        assert_eq!(table(255), [true; 8]);
    }

    #[test]
    fn pattern_encoding() {
        assert_eq!(Rule::pattern(false, false, false), 0b000);
        assert_eq!(Rule::pattern(true, false, false), 0b100);
        assert_eq!(Rule::pattern(false, true, false), 0b010);
        assert_eq!(Rule::pattern(false, false, true), 0b001);
        assert_eq!(Rule::pattern(true, true, true), 0b111);
    }

    #[test]
    fn output_masks_high_bits() {
        let r = Rule::new(90);
        assert_eq!(r.output(0b1010), r.output(0b010));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn transitions_mirror_the_number_bits(number in any::<u8>()) {
            let r = Rule::new(number);
            for p in 0u8..8 {
                prop_assert_eq!(r.output(p), (number >> p) & 1 == 1);
            }
        }

        #[test]
        fn output_ignores_bits_above_the_pattern(
            number in any::<u8>(),
            pattern in any::<u8>(),
        ) {
            let r = Rule::new(number);
            prop_assert_eq!(r.output(pattern), r.output(pattern & 0b111));
        }
    }
}
