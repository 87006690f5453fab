//! djb2-xor string hash.
//!
//! `h = 5381; for c in s { h = (33 * h) ^ c }`, with every step wrapping at
//! 32 bits. Characters enter the recurrence as their Unicode scalar value,
//! so the result is identical on every platform and every run.

/// Seed of the recurrence.
pub const DJB2_SEED: u32 = 5381;

/// Multiplier applied to the accumulator before each character is mixed in.
pub const DJB2_MULTIPLIER: u32 = 33;

/// Hash `input` to a `u32`.
///
/// Total over all strings: the empty string hashes to [`DJB2_SEED`].
#[must_use]
pub fn djb2(input: &str) -> u32 {
    input.chars().fold(DJB2_SEED, |acc, c| {
        acc.wrapping_mul(DJB2_MULTIPLIER) ^ u32::from(c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_seed() {
        assert_eq!(djb2(""), 5381);
    }

    #[test]
    fn single_digit_golden() {
        // 5381 * 33 = 177573; 177573 ^ '0' (48) = 177557
        assert_eq!(djb2("0"), 177_557);
        assert_eq!(djb2("1"), 177_556);
    }

    #[test]
    fn multi_char_goldens() {
        assert_eq!(djb2("42"), 5_859_203);
        assert_eq!(djb2("-7"), 5_859_007);
        assert_eq!(djb2("abc"), 193_409_669);
        assert_eq!(djb2("12345"), 114_618_196);
    }

    #[test]
    fn long_input_wraps_instead_of_overflowing() {
        assert_eq!(djb2("9007199254740993"), 614_699_977);
        let long = "x".repeat(10_000);
        assert_eq!(djb2(&long), djb2(&long));
    }

    #[test]
    fn non_ascii_uses_scalar_values() {
        assert_eq!(djb2("héllo"), 182_521_323);
        // U+1F980 enters as one scalar, not as a surrogate pair.
        assert_eq!(djb2("🦀"), 216_101);
    }

    #[test]
    fn order_matters() {
        assert_ne!(djb2("ab"), djb2("ba"));
    }
}
