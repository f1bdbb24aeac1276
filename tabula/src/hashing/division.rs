//! The division method of hashing from [CLRS (2009), ch. 11.3.1]: a key maps to the
//! remainder of its division by the table size.
//!
//! The method inherits its quality from the table size, so the companion size here is the
//! prime 89, far from any power of two.
//!
//! [CLRS (2009), ch. 11.3.1]: https://mitpress.mit.edu/9780262033848/introduction-to-algorithms/
use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Number of slots addressed by the division method. Prime.
pub const DIVISION_TABLE_SIZE: usize = 89;

/// Hashes an integer key into `[0, table_size - 1]` using the division method.
///
/// # Parameters
///
/// - `key`: The input key.
/// - `table_size`: Number of slots in the table. Must be greater than zero.
#[inline]
pub fn hash_divide(key: &BigUint, table_size: usize) -> usize {
    debug_assert!(table_size > 0, r#""table_size" must be > 0"#);

    let slot = key % BigUint::from(table_size);
    // The remainder is below the table size, so the narrowing cannot truncate.
    slot.to_usize().unwrap_or(0)
}
