//! Selection of the hashing strategy for the chaining table.
use crate::hashing::division::{hash_divide, DIVISION_TABLE_SIZE};
use crate::hashing::multiplication::{
    fixed_point_multiplier, hash_multiply, DEFAULT_EXPONENT, DEFAULT_WORD_SIZE,
};
use num_bigint::BigUint;
use tabula_core::TabulaError;

/// Hashing strategy of the chaining table, fixed at construction.
///
/// Carries everything the per-key path needs so slot computation performs no setup work;
/// in particular the multiplication method stores its fixed-point multiplier, computed once
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashingMethod {
    /// The division method over a fixed prime table size.
    Division,
    /// The multiplication method over `2^exponent` slots.
    Multiplication {
        /// Number of bits of the fixed-point representation.
        word_size: u32,
        /// Table-size exponent.
        exponent: u32,
        /// `floor(A * 2^word_size)`, precomputed for `word_size`.
        multiplier: BigUint,
    },
}

impl HashingMethod {
    /// Creates the division method.
    pub fn division() -> Self {
        HashingMethod::Division
    }

    /// Creates the multiplication method with the given word size and table-size exponent.
    ///
    /// # Errors
    ///
    /// Returns [`TabulaError::InvalidParameter`] if `word_size` is zero, if `exponent` is
    /// zero or exceeds `word_size`, or if slot indices for `exponent` would not fit the
    /// machine word.
    pub fn multiplication(word_size: u32, exponent: u32) -> Result<Self, TabulaError> {
        if word_size == 0 {
            return Err(TabulaError::InvalidParameter("word_size"));
        }
        if exponent == 0 || exponent > word_size || exponent >= usize::BITS {
            return Err(TabulaError::InvalidParameter("exponent"));
        }
        Ok(HashingMethod::Multiplication {
            word_size,
            exponent,
            multiplier: fixed_point_multiplier(word_size),
        })
    }

    /// Creates the multiplication method with the default word size and exponent.
    pub fn multiplication_default() -> Self {
        HashingMethod::Multiplication {
            word_size: DEFAULT_WORD_SIZE,
            exponent: DEFAULT_EXPONENT,
            multiplier: fixed_point_multiplier(DEFAULT_WORD_SIZE),
        }
    }

    /// Get the number of slots the method addresses.
    pub fn table_size(&self) -> usize {
        match self {
            HashingMethod::Division => DIVISION_TABLE_SIZE,
            HashingMethod::Multiplication { exponent, .. } => {
                debug_assert!(
                    *exponent < usize::BITS,
                    r#""exponent" must fit the machine word"#
                );
                1_usize << exponent
            }
        }
    }

    /// Computes the slot of an integer key.
    #[inline]
    pub fn slot_for(&self, key: &BigUint) -> usize {
        match self {
            HashingMethod::Division => hash_divide(key, DIVISION_TABLE_SIZE),
            HashingMethod::Multiplication {
                word_size,
                exponent,
                multiplier,
            } => hash_multiply(key, *word_size, *exponent, multiplier),
        }
    }
}

/// Division is the method the chaining table falls back to when none is chosen.
impl Default for HashingMethod {
    fn default() -> Self {
        HashingMethod::Division
    }
}
