//! String-to-integer key derivation by positional radix expansion, as described in
//! [CLRS (2009), ch. 11.3] (keys interpreted "in a suitable radix notation").
//!
//! A string is read as the digits of a number: `Σ ord(s[i]) * radix^(n-1-i)` over its code
//! points. The sum is evaluated with Horner's rule, and the accumulator is an
//! arbitrary-precision integer so the expansion stays exact for inputs of any length.
//!
//! [CLRS (2009), ch. 11.3]: https://mitpress.mit.edu/9780262033848/introduction-to-algorithms/
use num_bigint::BigUint;
use num_traits::Zero;

/// Radix used to derive keys for the regular table operations.
pub const DEFAULT_RADIX: u32 = 31;

/// Radix covering the whole ASCII range, used by the constant-space string-to-hash path.
pub const ASCII_RADIX: u32 = 128;

/// Converts a string into a non-negative integer by radix expansion.
///
/// # Parameters
///
/// - `value`: The input string. Any code point is accepted.
/// - `radix`: The base of the expansion.
///
/// # Notes
///
/// - The empty string derives to `0`.
/// - Strings sharing a proper prefix derive to different values whenever their lengths or
///   trailing characters differ. No other collision guarantee is made.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use tabula::hashing::radix::{string_to_int, DEFAULT_RADIX};
///
/// let key = string_to_int("plumage", DEFAULT_RADIX);
/// assert_eq!(key, BigUint::from(102603756267_u64));
/// ```
#[inline]
pub fn string_to_int(value: &str, radix: u32) -> BigUint {
    let mut acc = BigUint::zero();
    for ch in value.chars() {
        acc = acc * radix + ch as u32;
    }
    acc
}

/// Converts a string into its radix expansion reduced by `modulus`, in constant space.
///
/// Equivalent to `string_to_int(value, radix) % modulus` while only ever holding an
/// accumulator below `modulus * radix`, independent of input length.
///
/// # Parameters
///
/// - `value`: The input string. Any code point is accepted.
/// - `radix`: The base of the expansion.
/// - `modulus`: The reduction modulus. Must be greater than zero.
#[inline]
pub fn string_to_int_mod(value: &str, radix: u32, modulus: &BigUint) -> BigUint {
    debug_assert!(!modulus.is_zero(), r#""modulus" must be > 0"#);

    let mut acc = BigUint::zero();
    for ch in value.chars() {
        acc = (acc * radix + ch as u32) % modulus;
    }
    acc
}
