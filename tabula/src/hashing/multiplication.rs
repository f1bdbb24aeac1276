//! The multiplication method of hashing from [CLRS (2009), ch. 11.3.2], computed in
//! fixed-point integer arithmetic.
//!
//! The method multiplies the key by the fractional constant `A = (sqrt(5) - 1) / 2`, the
//! value suggested by [Knuth (1998)], keeps the fractional part of the product and takes its
//! top `p` bits as the slot index. Representing `A` as the integer `s = floor(A * 2^w)`
//! keeps the whole computation exact: the low `w` bits of `k * s` are the fractional part
//! scaled by `2^w`, and the slot is those bits shifted down by `w - p`. No floating-point
//! value is involved at any step, so there is no drift between word sizes.
//!
//! [CLRS (2009), ch. 11.3.2]: https://mitpress.mit.edu/9780262033848/introduction-to-algorithms/
//! [Knuth (1998)]: https://www-cs-faculty.stanford.edu/~knuth/taocp.html
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// Word size of the fixed-point representation used when none is configured.
pub const DEFAULT_WORD_SIZE: u32 = 64;

/// Table-size exponent used when none is configured.
pub const DEFAULT_EXPONENT: u32 = 7;

/// Computes `floor(A * 2^word_size)` for `A = (sqrt(5) - 1) / 2`, the fixed-point
/// multiplier of the multiplication method.
///
/// Derived in pure integer arithmetic: `A * 2^w = sqrt(5 * 2^(2w - 2)) - 2^(w - 1)`, and
/// since the subtrahend is an integer, flooring the whole expression equals flooring the
/// square root. The integer square root therefore gives the multiplier exactly.
///
/// # Parameters
///
/// - `word_size`: Number of bits `w` of the fixed-point representation. Must be greater
///   than zero.
pub fn fixed_point_multiplier(word_size: u32) -> BigUint {
    debug_assert!(word_size > 0, r#""word_size" must be > 0"#);

    let radicand = BigUint::from(5_u8) << (2 * word_size - 2);
    radicand.sqrt() - (BigUint::one() << (word_size - 1))
}

/// Hashes an integer key into `[0, 2^exponent - 1]` using the multiplication method.
///
/// # Parameters
///
/// - `key`: The input key.
/// - `word_size`: Number of bits `w` of the fixed-point representation.
/// - `exponent`: Table-size exponent `p`, for a table of `2^p` slots. Must satisfy
///   `1 <= p <= w` and fit the machine word.
/// - `multiplier`: The fixed-point constant for `word_size`, from
///   [`fixed_point_multiplier`].
///
/// # Notes
///
/// - The result is invariant under `word_size` changes as long as `multiplier` is
///   recomputed for the new width.
#[inline]
pub fn hash_multiply(key: &BigUint, word_size: u32, exponent: u32, multiplier: &BigUint) -> usize {
    debug_assert!(exponent > 0, r#""exponent" must be > 0"#);
    debug_assert!(exponent <= word_size, r#""exponent" must be <= "word_size""#);
    debug_assert!(
        exponent < usize::BITS,
        r#""exponent" must fit the machine word"#
    );

    let mask = (BigUint::one() << word_size) - BigUint::one();
    let fractional = (key * multiplier) & mask;
    let slot = fractional >> (word_size - exponent);
    // At most `exponent` bits survive the shift, so the narrowing cannot truncate.
    slot.to_usize().unwrap_or(0)
}
