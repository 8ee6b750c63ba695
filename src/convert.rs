//! Integer to base-32 digit conversion.
//!
//! Digits are plain values in `0..32`, most significant first. Turning them
//! into symbols is the job of [`crate::alphabet`].

use num_bigint::BigUint;

/// A non-negative integer that can be written in base 32.
///
/// Implemented for the unsigned primitives and for [`BigUint`]. All
/// arithmetic is exact; the primitives report overflow instead of wrapping.
pub trait Integer: Sized {
    fn zero() -> Self;

    fn is_zero(&self) -> bool;

    /// Removes the least significant base-32 digit and returns it.
    fn pop_digit(&mut self) -> u8;

    /// Returns `self * 32 + digit`, or `None` if that does not fit.
    fn push_digit(self, digit: u8) -> Option<Self>;

    /// `self mod 37`.
    fn check_value(&self) -> u8;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {$(
        impl Integer for $t {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }

            #[inline]
            fn pop_digit(&mut self) -> u8 {
                let digit = (*self & 0x1F) as u8;
                *self >>= 5;
                digit
            }

            #[inline]
            fn push_digit(self, digit: u8) -> Option<Self> {
                self.checked_mul(32)?.checked_add(<$t>::from(digit))
            }

            #[inline]
            fn check_value(&self) -> u8 {
                (*self % 37) as u8
            }
        }
    )*};
}

impl_integer!(u8, u16, u32, u64, u128, usize);

impl Integer for BigUint {
    fn zero() -> Self {
        <BigUint as num_traits::Zero>::zero()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }

    fn pop_digit(&mut self) -> u8 {
        let digit = self.iter_u32_digits().next().map_or(0, |low| (low & 0x1F) as u8);
        *self >>= 5u32;
        digit
    }

    fn push_digit(self, digit: u8) -> Option<Self> {
        Some((self << 5u32) + u32::from(digit))
    }

    fn check_value(&self) -> u8 {
        // Horner over the 32-bit limbs, most significant first
        let rem = self
            .iter_u32_digits()
            .rev()
            .fold(0u64, |acc, limb| ((acc << 32) | u64::from(limb)) % 37);
        rem as u8
    }
}

/// Splits `value` into base-32 digits, most significant first.
///
/// Zero yields `[0]`; any other value has no leading zero digits.
pub fn to_digits<V: Integer>(mut value: V) -> Vec<u8> {
    if value.is_zero() {
        return vec![0];
    }

    let mut digits = Vec::new();
    while !value.is_zero() {
        digits.push(value.pop_digit());
    }
    digits.reverse();
    digits
}

/// Folds base-32 digits, most significant first, back into a value.
///
/// Returns `None` if the value does not fit in `V`. Every digit must be below
/// 32.
pub fn from_digits<V: Integer>(digits: &[u8]) -> Option<V> {
    debug_assert!(digits.iter().all(|&d| d < 32));
    digits
        .iter()
        .try_fold(V::zero(), |acc, &digit| acc.push_digit(digit))
}
