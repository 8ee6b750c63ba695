use crate::alphabet::{decode_check_symbol, decode_symbol, encode_symbol};
use crate::convert::{from_digits, to_digits, Integer};
use crate::error::DecodeError;
use crate::{checksum, format};

/// Per-call settings for [`encode`] and [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Append a check symbol when encoding, expect one when decoding.
    pub checksum: bool,
    /// Number of hyphen-separated groups to emit. 0 and 1 mean none. Ignored
    /// when decoding, where hyphens are always accepted.
    pub partitions: usize,
}

impl Options {
    pub const fn new() -> Self {
        Self {
            checksum: false,
            partitions: 1,
        }
    }

    pub const fn with_checksum(mut self, checksum: bool) -> Self {
        self.checksum = checksum;
        self
    }

    pub const fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes `value`, most significant symbol first.
///
/// The check symbol is derived from `value` itself and appended before
/// grouping, so it may share a group with payload symbols.
pub fn encode<V: Integer>(value: V, opts: Options) -> String {
    let check = opts.checksum.then(|| checksum::compute(&value));
    let mut encoded: String = to_digits(value).into_iter().map(encode_symbol).collect();
    encoded.extend(check);
    format::partition(&encoded, opts.partitions)
}

/// Decodes `input`, returning `None` for anything malformed.
///
/// See [`decode_strict`] for the reason behind a failure.
pub fn decode<V: Integer>(input: &str, opts: Options) -> Option<V> {
    match decode_strict(input, opts) {
        Ok(value) => Some(value),
        Err(err) => {
            log::trace!("rejected {input:?}: {err}");
            None
        }
    }
}

/// Decodes `input`, reporting why it was rejected.
///
/// Hyphens are dropped and case is ignored. With `opts.checksum` the last
/// symbol is taken as the check symbol and must match the decoded value.
pub fn decode_strict<V: Integer>(input: &str, opts: Options) -> Result<V, DecodeError> {
    let normalized = format::normalize(input);
    let mut symbols: Vec<char> = normalized.chars().collect();

    let check = if opts.checksum {
        let found = symbols.pop().ok_or(DecodeError::Empty)?;
        if decode_check_symbol(found).is_none() {
            return Err(DecodeError::InvalidCharacter {
                ch: found,
                position: symbols.len(),
            });
        }
        Some(found)
    } else {
        None
    };

    if symbols.is_empty() {
        return Err(DecodeError::Empty);
    }

    let digits = symbols
        .iter()
        .enumerate()
        .map(|(position, &ch)| decode_symbol(ch).ok_or(DecodeError::InvalidCharacter { ch, position }))
        .collect::<Result<Vec<u8>, _>>()?;

    let value: V = from_digits(&digits).ok_or(DecodeError::Overflow)?;

    if let Some(found) = check {
        if !checksum::verify(&value, found) {
            return Err(DecodeError::ChecksumMismatch {
                expected: checksum::compute(&value),
                found,
            });
        }
    }
    Ok(value)
}
