//! The chaining table itself: slot array, population bookkeeping and the public operations.
use crate::chaining::list::Chain;
use crate::hashing::division::DIVISION_TABLE_SIZE;
use crate::hashing::method::HashingMethod;
use crate::hashing::radix::{string_to_int, string_to_int_mod, ASCII_RADIX, DEFAULT_RADIX};
use num_bigint::BigUint;
use num_traits::One;
use std::fmt;
use tabula_core::Table;

/// A fixed-capacity hash table over string keys, resolving collisions by separate chaining.
///
/// The hashing strategy is fixed at construction and the slot array never grows: a
/// pathological key set degrades slots to chains of the whole population with no
/// mitigation. Duplicate keys are permitted and counted independently, which makes the
/// table multiset-like rather than a strict map; `search` and `delete` only ever reach the
/// first match in chain order.
///
/// # Examples
///
/// ```rust
/// use tabula::chaining::ChainedTable;
///
/// let mut table = ChainedTable::new();
/// table.insert("ex-parrot");
/// assert_eq!(table.search("ex-parrot"), Some("ex-parrot"));
/// assert_eq!(table.search("parrot"), None);
/// ```
pub struct ChainedTable {
    method: HashingMethod,
    slots: Vec<Option<Chain>>,
    population: usize,
}

impl ChainedTable {
    /// Creates a table using the division method over its prime table size.
    pub fn new() -> Self {
        Self::with_method(HashingMethod::default())
    }

    /// Creates a table using the given hashing method.
    ///
    /// The slot array is sized by the method (89 for division, `2^exponent` for
    /// multiplication) and keeps that size for the table's lifetime.
    pub fn with_method(method: HashingMethod) -> Self {
        let table_size = method.table_size();
        let mut slots = Vec::with_capacity(table_size);
        slots.resize_with(table_size, || None);
        Self {
            method,
            slots,
            population: 0,
        }
    }

    /// Get the hashing method of the table.
    pub fn method(&self) -> &HashingMethod {
        &self.method
    }

    /// Get the number of slots in the table.
    pub fn table_size(&self) -> usize {
        self.slots.len()
    }

    /// Get the number of stored keys, duplicates included.
    pub fn population(&self) -> usize {
        self.population
    }

    /// Inserts a key, linking it at the head of its slot's chain.
    ///
    /// Always adds a node and increments the population, also for keys already present.
    pub fn insert(&mut self, key: impl Into<String>) {
        let key = key.into();
        let slot = self.hash(&key);
        self.slots[slot].get_or_insert_with(Chain::new).push(key);
        self.population += 1;
    }

    /// Searches for a key and returns the stored key, or `None` if it is absent.
    ///
    /// A slot that was never populated is an ordinary miss, not an error.
    pub fn search(&self, key: &str) -> Option<&str> {
        let slot = self.hash(key);
        self.slots[slot].as_ref()?.find(key)
    }

    /// Deletes the first occurrence of a key and returns it, or `None` if it is absent.
    ///
    /// On a miss the population is left untouched. The slot's chain stays allocated even
    /// when the removal empties it.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        let slot = self.hash(key);
        let deleted = self.slots[slot].as_mut()?.remove(key)?;
        self.population -= 1;
        Some(deleted)
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Computes the slot of a key: the hashing method applied to the key's radix-31
    /// derivation.
    pub fn hash(&self, key: &str) -> usize {
        self.method.slot_for(&string_to_int(key, DEFAULT_RADIX))
    }

    /// Computes the slot of a key's radix-128 derivation in constant space.
    ///
    /// The accumulator is reduced at every step of the expansion (modulo the table size for
    /// division, masked to the word size for multiplication, where the reduction commutes
    /// with the final multiply-and-mask), so no full-width integer is ever materialized.
    ///
    /// # Notes
    ///
    /// - Equal to `slot_for(string_to_int(key, ASCII_RADIX))` for every key. The radix
    ///   differs from [`ChainedTable::hash`], so this is an alternate addressing function
    ///   rather than a shortcut for it.
    pub fn string_to_hash(&self, key: &str) -> usize {
        let modulus = match &self.method {
            HashingMethod::Division => BigUint::from(DIVISION_TABLE_SIZE),
            HashingMethod::Multiplication { word_size, .. } => BigUint::one() << *word_size,
        };
        let reduced = string_to_int_mod(key, ASCII_RADIX, &modulus);
        self.method.slot_for(&reduced)
    }

    /// Get the chain of a slot, or `None` if the slot is out of range or was never
    /// populated.
    pub fn chain(&self, slot: usize) -> Option<&Chain> {
        self.slots.get(slot)?.as_ref()
    }
}

impl Default for ChainedTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Table for ChainedTable {
    fn len(&self) -> usize {
        self.population
    }

    fn is_empty(&self) -> bool {
        self.population == 0
    }

    fn load_factor(&self) -> f64 {
        self.population as f64 / self.slots.len() as f64
    }

    fn num_collisions(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|chain| chain.len() > 1)
            .map(|chain| chain.len() - 1)
            .sum()
    }
}

impl fmt::Debug for ChainedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.slots
                    .iter()
                    .enumerate()
                    .filter_map(|(slot, chain)| chain.as_ref().map(|chain| (slot, chain))),
            )
            .finish()
    }
}

/// Renders every slot with at least one key as a `T[slot]-> key -> key` line, in slot
/// order.
impl fmt::Display for ChainedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, chain) in self.slots.iter().enumerate() {
            let Some(chain) = chain else { continue };
            if chain.is_empty() {
                continue;
            }
            write!(f, "T[{}]-> ", slot)?;
            let mut keys = chain.iter();
            if let Some(first) = keys.next() {
                write!(f, "{}", first)?;
            }
            for key in keys {
                write!(f, " -> {}", key)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_testing::chained_table_tests;
    use tabula_testing::data::PARROT_WORDS;

    fn division_table() -> ChainedTable {
        ChainedTable::new()
    }

    fn multiplication_table() -> ChainedTable {
        ChainedTable::with_method(HashingMethod::multiplication_default())
    }

    fn corpus_table(method: HashingMethod) -> ChainedTable {
        let mut table = ChainedTable::with_method(method);
        for word in PARROT_WORDS {
            table.insert(*word);
        }
        table
    }

    #[test]
    fn test_new_defaults_to_division() {
        let table = ChainedTable::new();
        assert_eq!(table.method(), &HashingMethod::Division);
        assert_eq!(table.table_size(), 89);
        assert_eq!(table.population(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_with_method_sizes_the_slot_array() {
        let table =
            ChainedTable::with_method(HashingMethod::multiplication(64, 14).expect("valid"));
        assert_eq!(table.table_size(), 16384);
    }

    #[test]
    fn test_hash_division() {
        let table = division_table();
        assert_eq!(table.hash("plumage"), 1);
    }

    #[test]
    fn test_hash_multiplication() {
        let table = multiplication_table();
        assert_eq!(table.hash("plumage"), 53);
    }

    #[test]
    fn test_division_collision_pair_shares_a_slot() {
        let mut table = division_table();
        table.insert("squire");
        table.insert("shuffled");

        assert_eq!(table.hash("squire"), 56);
        assert_eq!(table.hash("shuffled"), 56);

        let chain = table.chain(56).expect("slot 56 is populated");
        assert_eq!(
            chain.iter().collect::<Vec<_>>(),
            vec!["shuffled", "squire"]
        );
    }

    #[test]
    fn test_multiplication_collision_pair_shares_a_slot() {
        let mut table = multiplication_table();
        table.insert("stiff");
        table.insert("python");

        assert_eq!(table.hash("stiff"), 113);
        assert_eq!(table.hash("python"), 113);

        let chain = table.chain(113).expect("slot 113 is populated");
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_radix_128_derivation_addresses_a_slot() {
        // The code points 128, 14, 14 expand to 128 * 128^2 + 14 * 128 + 14 = 123456.
        let key = "\u{80}\u{0E}\u{0E}";
        assert_eq!(string_to_int(key, 128), BigUint::from(123456_u32));

        let method = HashingMethod::multiplication(64, 14).expect("valid");
        assert_eq!(method.slot_for(&BigUint::from(123456_u32)), 67);
    }

    #[test]
    fn test_duplicate_keys_share_a_slot_and_count_twice() {
        let mut table = division_table();
        table.insert("sorry");
        table.insert("sorry");

        assert_eq!(table.population(), 2);
        let slot = table.hash("sorry");
        assert_eq!(slot, 65);
        assert_eq!(table.chain(slot).map(Chain::len), Some(2));

        assert_eq!(table.delete("sorry"), Some("sorry".to_owned()));
        assert_eq!(table.population(), 1);
        assert_eq!(table.search("sorry"), Some("sorry"));

        assert_eq!(table.delete("sorry"), Some("sorry".to_owned()));
        assert_eq!(table.population(), 0);
        assert_eq!(table.search("sorry"), None);
    }

    #[test]
    fn test_delete_keeps_the_emptied_chain_allocated() {
        let mut table = division_table();
        table.insert("ex-parrot");
        let slot = table.hash("ex-parrot");
        assert_eq!(slot, 66);

        table.delete("ex-parrot");
        let chain = table.chain(slot).expect("chain persists after removal");
        assert!(chain.is_empty());
    }

    #[test]
    fn test_delete_from_shared_chain_leaves_the_others() {
        // Bolton, bucket and spells all divide to slot 68.
        let mut table = division_table();
        table.insert("Bolton");
        table.insert("bucket");
        table.insert("spells");

        assert_eq!(table.delete("bucket"), Some("bucket".to_owned()));
        let chain = table.chain(68).expect("slot 68 is populated");
        assert_eq!(chain.iter().collect::<Vec<_>>(), vec!["spells", "Bolton"]);
        assert_eq!(table.population(), 2);
        assert!(table.contains("Bolton"));
        assert!(table.contains("spells"));
        assert!(!table.contains("bucket"));
    }

    #[test]
    fn test_string_to_hash_division() {
        let table = division_table();
        assert_eq!(table.string_to_hash("this parrot is dead"), 74);
        assert_eq!(table.string_to_hash("uk"), 42);
    }

    #[test]
    fn test_string_to_hash_multiplication() {
        let table = multiplication_table();
        assert_eq!(table.string_to_hash("this parrot is dead"), 39);
        assert_eq!(table.string_to_hash("uk"), 103);

        let wide = ChainedTable::with_method(HashingMethod::multiplication(64, 14).expect("valid"));
        assert_eq!(wide.string_to_hash("this parrot is dead"), 5092);
        assert_eq!(wide.string_to_hash("uk"), 13216);
    }

    #[test]
    fn test_string_to_hash_matches_full_expansion() {
        for table in [division_table(), multiplication_table()] {
            for word in PARROT_WORDS {
                assert_eq!(
                    table.string_to_hash(word),
                    table.method().slot_for(&string_to_int(word, ASCII_RADIX)),
                    "word {:?}",
                    word,
                );
            }
        }
    }

    #[test]
    fn test_corpus_statistics_division() {
        let table = corpus_table(HashingMethod::division());

        assert_eq!(table.population(), PARROT_WORDS.len());
        assert_eq!(table.len(), 75);
        assert_eq!(table.num_collisions(), 24);
        assert_eq!(
            table.slots.iter().flatten().filter(|c| !c.is_empty()).count(),
            51
        );
        let longest = table.slots.iter().flatten().map(Chain::len).max();
        assert_eq!(longest, Some(4));
        assert!((table.load_factor() - 75.0 / 89.0).abs() < 1e-12);
    }

    #[test]
    fn test_corpus_statistics_multiplication() {
        let table = corpus_table(HashingMethod::multiplication_default());

        assert_eq!(table.population(), 75);
        assert_eq!(table.num_collisions(), 18);
        assert_eq!(
            table.slots.iter().flatten().filter(|c| !c.is_empty()).count(),
            57
        );
        let longest = table.slots.iter().flatten().map(Chain::len).max();
        assert_eq!(longest, Some(4));
    }

    #[test]
    fn test_chain_accessor_bounds() {
        let table = division_table();
        assert!(table.chain(0).is_none());
        assert!(table.chain(88).is_none());
        assert!(table.chain(89).is_none());
        assert!(table.chain(usize::MAX).is_none());
    }

    #[test]
    fn test_display_renders_occupied_slots_in_order() {
        let mut table = division_table();
        table.insert("ex-parrot");
        table.insert("squire");
        table.insert("shuffled");

        assert_eq!(
            table.to_string(),
            "T[56]-> shuffled -> squire\nT[66]-> ex-parrot\n"
        );
    }

    #[test]
    fn test_debug_of_empty_table() {
        assert_eq!(format!("{:?}", division_table()), "{}");
    }

    chained_table_tests!(division, division_table);
    chained_table_tests!(multiplication, multiplication_table);
}
