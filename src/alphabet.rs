//! Symbol tables: value to symbol for encoding, symbol to value for decoding.

use crate::{ALIASES, CHECK_CHARS, CROCKFORD_CHARS};

/// Number of symbols usable as payload digits.
pub const RADIX: u8 = 32;

/// Number of symbols usable in the check position.
pub const CHECK_RADIX: u8 = 37;

const INVALID: u8 = u8::MAX;

const fn generate_symbol_table() -> [u8; CHECK_RADIX as usize] {
    let mut table = [0u8; CHECK_RADIX as usize];
    let mut i = 0;
    while i < 32 {
        table[i] = CROCKFORD_CHARS[i];
        i += 1;
    }
    while i < CHECK_RADIX as usize {
        table[i] = CHECK_CHARS[i - 32];
        i += 1;
    }
    table
}

const fn generate_decode_lut(with_check: bool) -> [u8; 256] {
    let mut lut = [INVALID; 256];
    let mut i = 0u8;
    while i < 32 {
        let char_code = CROCKFORD_CHARS[i as usize];
        lut[char_code.to_ascii_lowercase() as usize] = i;
        lut[char_code.to_ascii_uppercase() as usize] = i;
        i += 1;
    }

    let mut a = 0;
    while a < ALIASES.len() {
        let (char_code, value) = ALIASES[a];
        lut[char_code.to_ascii_lowercase() as usize] = value;
        lut[char_code.to_ascii_uppercase() as usize] = value;
        a += 1;
    }

    if with_check {
        let mut c = 0;
        while c < CHECK_CHARS.len() {
            let char_code = CHECK_CHARS[c];
            lut[char_code.to_ascii_lowercase() as usize] = 32 + c as u8;
            lut[char_code.to_ascii_uppercase() as usize] = 32 + c as u8;
            c += 1;
        }
    }
    lut
}

const SYMBOLS: [u8; CHECK_RADIX as usize] = generate_symbol_table();
const DIGIT_LUT: [u8; 256] = generate_decode_lut(false);
const CHECK_LUT: [u8; 256] = generate_decode_lut(true);

/// Returns the symbol for `value`.
///
/// Values `0..32` give the canonical digits, `32..37` the check-only symbols
/// `* ~ $ = U`.
///
/// # Panics
///
/// Panics if `value >= 37`.
#[inline]
pub fn encode_symbol(value: u8) -> char {
    char::from(SYMBOLS[usize::from(value)])
}

/// Reads a payload digit. Check-only symbols are rejected.
#[inline]
pub fn decode_symbol(c: char) -> Option<u8> {
    lookup(&DIGIT_LUT, c)
}

/// Reads a symbol in the check position, which additionally accepts the
/// check-only symbols as `32..37`.
#[inline]
pub fn decode_check_symbol(c: char) -> Option<u8> {
    lookup(&CHECK_LUT, c)
}

#[inline(always)]
fn lookup(lut: &[u8; 256], c: char) -> Option<u8> {
    let byte = u8::try_from(c).ok()?;
    match lut[usize::from(byte)] {
        INVALID => None,
        value => Some(value),
    }
}
