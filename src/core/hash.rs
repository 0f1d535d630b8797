//! Positional base weighting.
//!
//! Every base contributes `value(base) * 2^(position + 1)` to a window's
//! fingerprint. Because the weight doubles per position, moving a whole run of
//! bases one position left or right is a single halving or doubling of that
//! run's summed contribution, which is what the indel enumerator relies on.

/// Fixed value assigned to a base. Unrecognized bytes weigh nothing.
#[must_use]
pub const fn base_value(base: u8) -> i64 {
    match base {
        b'A' => 517,
        b'T' => 433,
        b'C' => 1123,
        b'G' => 127,
        b'N' => 1,
        _ => 0,
    }
}

/// Contribution of `base` at window `position`.
#[must_use]
pub const fn contribution(base: u8, position: usize) -> i64 {
    base_value(base) * (2_i64 << position)
}

/// Fingerprint of a literal window: the sum of its positional contributions.
///
/// This is what a caller computes for an observed read window before looking
/// it up in an index.
#[must_use]
pub fn fingerprint(bases: &[u8]) -> i64 {
    bases
        .iter()
        .enumerate()
        .map(|(position, &base)| contribution(base, position))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_values() {
        assert_eq!(base_value(b'A'), 517);
        assert_eq!(base_value(b'T'), 433);
        assert_eq!(base_value(b'C'), 1123);
        assert_eq!(base_value(b'G'), 127);
        assert_eq!(base_value(b'N'), 1);
        assert_eq!(base_value(b'a'), 0);
        assert_eq!(base_value(b'-'), 0);
    }

    #[test]
    fn test_contribution_doubles_per_position() {
        assert_eq!(contribution(b'A', 0), 1034);
        for position in 0..49 {
            assert_eq!(
                contribution(b'C', position + 1),
                2 * contribution(b'C', position)
            );
        }
    }

    #[test]
    fn test_fingerprint_sums_contributions() {
        // 517*2 + 1123*4 + 127*8 + 433*16
        assert_eq!(fingerprint(b"ACGT"), 13_470);
        assert_eq!(fingerprint(b""), 0);
        assert_eq!(fingerprint(b"xx"), 0);
    }

    #[test]
    fn test_largest_window_fits() {
        let window = [b'C'; 50];
        let total = fingerprint(&window);
        assert_eq!(total, 1123 * ((1_i64 << 51) - 2));
    }
}
