//! Crockford's Base32 for non-negative integers.
//!
//! Values are written most-significant symbol first in the alphabet
//! `0123456789ABCDEFGHJKMNPQRSTVWXYZ`, optionally followed by a mod-37 check
//! symbol and split into hyphen-separated groups. Decoding is lenient: case is
//! ignored, hyphens are dropped and `O`, `I`, `L` read as `0`, `1`, `1`.
//!
//! ```
//! use crockford32::{decode, encode, Options};
//!
//! let opts = Options::new().with_checksum(true);
//! assert_eq!(encode(973113317u64, opts), "X011Z5$");
//! assert_eq!(decode::<u64>("x0ll-z5$", opts), Some(973113317));
//! ```

pub(crate) const CROCKFORD_CHARS: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
pub(crate) const CHECK_CHARS: &[u8; 5] = b"*~$=U";

/// Symbols which never appear in encoder output but are read as digits.
pub(crate) const ALIASES: &[(u8, u8); 3] = &[(b'O', 0), (b'I', 1), (b'L', 1)];

pub(crate) const SEPARATOR: char = '-';

pub mod alphabet;
pub mod checksum;
mod codec;
pub mod convert;
mod error;
pub mod format;

pub use crate::codec::{decode, decode_strict, encode, Options};
pub use crate::convert::Integer;
pub use crate::error::DecodeError;
