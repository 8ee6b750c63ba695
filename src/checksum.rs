//! The mod-37 check symbol.
//!
//! 37 is the smallest prime above 32, so every single-symbol substitution and
//! every adjacent transposition changes the check value.

use crate::alphabet::{decode_check_symbol, encode_symbol};
use crate::convert::Integer;

/// Check symbol for `value`, one of the 37 symbols.
pub fn compute<V: Integer>(value: &V) -> char {
    encode_symbol(value.check_value())
}

/// Whether `symbol` is the check symbol of `value`.
///
/// Aliases and lowercase are accepted, so `o` verifies a value whose check
/// symbol is `0`.
pub fn verify<V: Integer>(value: &V, symbol: char) -> bool {
    decode_check_symbol(symbol) == Some(value.check_value())
}
