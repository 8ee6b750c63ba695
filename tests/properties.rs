//! Property-based tests for the codec.

use crockford32::{decode, encode, Options};
use num_bigint::BigUint;
use proptest::prelude::*;

const PLAIN: Options = Options::new();
const CHECKED: Options = Options::new().with_checksum(true);

proptest! {
    #[test]
    fn prop_round_trip(v: u64) {
        prop_assert_eq!(decode::<u64>(&encode(v, PLAIN), PLAIN), Some(v));
    }

    #[test]
    fn prop_round_trip_u128(v: u128) {
        prop_assert_eq!(decode::<u128>(&encode(v, PLAIN), PLAIN), Some(v));
    }

    #[test]
    fn prop_round_trip_big(limbs in prop::collection::vec(any::<u32>(), 0..8)) {
        let v = BigUint::new(limbs);
        prop_assert_eq!(decode::<BigUint>(&encode(v.clone(), CHECKED), CHECKED), Some(v));
    }

    #[test]
    fn prop_checksum_round_trip(v: u64) {
        prop_assert_eq!(decode::<u64>(&encode(v, CHECKED), CHECKED), Some(v));
    }

    #[test]
    fn prop_native_matches_big(v: u64) {
        prop_assert_eq!(encode(v, CHECKED), encode(BigUint::from(v), CHECKED));
    }

    #[test]
    fn prop_case_insensitive(v: u64, checksum: bool) {
        let opts = PLAIN.with_checksum(checksum);
        let encoded = encode(v, opts);
        let expected = decode::<u64>(&encoded, opts);
        prop_assert_eq!(decode::<u64>(&encoded.to_lowercase(), opts), expected);
        prop_assert_eq!(decode::<u64>(&encoded.to_uppercase(), opts), expected);
    }

    #[test]
    fn prop_partition_round_trip(v: u64, n in 0usize..20, checksum: bool) {
        let opts = PLAIN.with_checksum(checksum).with_partitions(n);
        let encoded = encode(v, opts);
        let plain = encode(v, PLAIN.with_checksum(checksum));
        prop_assert_eq!(encoded.replace('-', ""), plain);
        prop_assert_eq!(decode::<u64>(&encoded, opts), Some(v));
    }

    #[test]
    fn prop_single_substitution_detected(v: u64, pos in any::<prop::sample::Index>(), sym in 0u8..32) {
        let encoded = encode(v, CHECKED);
        let mut symbols: Vec<char> = encoded.chars().collect();
        // only the payload: a replacement in the check position is just a
        // different check symbol
        let idx = pos.index(symbols.len() - 1);
        let replacement = crockford32::alphabet::encode_symbol(sym);
        prop_assume!(symbols[idx] != replacement);
        symbols[idx] = replacement;
        let mutated: String = symbols.into_iter().collect();
        prop_assert_eq!(decode::<u128>(&mutated, CHECKED), None);
    }
}
