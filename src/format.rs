//! Hyphen grouping on the way out, normalization on the way in.

use crate::SEPARATOR;

/// Splits `encoded` into `partitions` groups joined by hyphens.
///
/// Each step splits `remaining_len / remaining_groups` symbols off the front,
/// so later groups take the remainder: six symbols in four groups come out as
/// `1-1-2-2`. A count of 0 or 1 leaves the string alone, and a count larger
/// than the string is clamped so that no group is empty.
pub fn partition(encoded: &str, partitions: usize) -> String {
    let symbols: Vec<char> = encoded.chars().collect();
    let groups = partitions.min(symbols.len());
    if groups < 2 {
        return encoded.to_owned();
    }

    let mut out = String::with_capacity(encoded.len() + groups - 1);
    let mut rest = &symbols[..];
    for remaining in (1..=groups).rev() {
        let (head, tail) = rest.split_at(rest.len() / remaining);
        if remaining != groups {
            out.push(SEPARATOR);
        }
        out.extend(head);
        rest = tail;
    }
    out
}

/// Drops hyphens and folds ASCII letters to uppercase.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c != SEPARATOR)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_even() {
        assert_eq!(partition("XSNJG0", 3), "XS-NJ-G0");
        assert_eq!(partition("XSNJG0", 2), "XSN-JG0");
        assert_eq!(partition("XSNJG0", 6), "X-S-N-J-G-0");
    }

    #[test]
    fn test_partition_remainder_goes_last() {
        assert_eq!(partition("XSNJG0", 4), "X-S-NJ-G0");
        assert_eq!(partition("ABCDEFG", 3), "AB-CD-EFG");
        assert_eq!(partition("ABCDEFGH", 3), "AB-CDE-FGH");
    }

    #[test]
    fn test_partition_noop() {
        assert_eq!(partition("XSNJG0", 0), "XSNJG0");
        assert_eq!(partition("XSNJG0", 1), "XSNJG0");
        assert_eq!(partition("", 4), "");
        assert_eq!(partition("Z", 3), "Z");
    }

    #[test]
    fn test_partition_clamped() {
        assert_eq!(partition("ZZ", 5), "Z-Z");
        assert_eq!(partition("X011Z5$", 100), "X-0-1-1-Z-5-$");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("xs-nj-g0"), "XSNJG0");
        assert_eq!(normalize("--a-b--"), "AB");
        assert_eq!(normalize("x011z5$"), "X011Z5$");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_inverts_partition() {
        for n in 0..10 {
            assert_eq!(normalize(&partition("X011Z5$", n)), "X011Z5$");
        }
    }
}
