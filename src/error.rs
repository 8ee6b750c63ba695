//! Reasons a string fails to decode.

/// Why [`decode_strict`](crate::decode_strict) rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Nothing left to decode once hyphens (and the check symbol) are removed.
    #[error("no symbols to decode")]
    Empty,

    /// A character that is not a symbol in this position. `position` counts
    /// characters in the input with hyphens removed.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("checksum mismatch: expected {expected:?}, found {found:?}")]
    ChecksumMismatch { expected: char, found: char },

    /// The value is too large for the requested integer type.
    #[error("value does not fit in the target integer type")]
    Overflow,
}
