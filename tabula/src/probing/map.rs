//! Implements the table operations for [`ProbeMap`].
use crate::probing::{ProbeMap, Slot};
use std::hash::{BuildHasher, Hash};
use std::mem;
use tabula_core::{Table, TabulaError};

/// Slots allocated per live entry when the table rebuilds. Also the inverse of the load
/// factor a rebuild lands at.
const GROWTH_FACTOR: usize = 3;

impl<K, V, S> ProbeMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Resolves the probe sequence of a key.
    ///
    /// Scans forward from the hash's root slot, wrapping at the end of the array, and
    /// stops at the first empty slot or at the entry whose stored hash and key both match
    /// the probed ones.
    ///
    /// Returns the index of the terminating slot, paired with `true` when it holds the key
    /// and `false` when it is empty.
    ///
    /// # Errors
    ///
    /// - [`TabulaError::TableFull`]: The scan visited every slot without terminating. The
    ///   resize policy keeps the load factor below one, so this signals corrupt table
    ///   state rather than an operational condition.
    fn probe(&self, hash: u64, key: &K) -> Result<(usize, bool), TabulaError> {
        let capacity = self.slots.len();
        let root = (hash % capacity as u64) as usize;
        for offset in 0..capacity {
            let idx = (root + offset) % capacity;
            match &self.slots[idx] {
                Slot::Empty => return Ok((idx, false)),
                Slot::Occupied {
                    hash: stored,
                    key: occupant,
                    ..
                } if *stored == hash && occupant == key => return Ok((idx, true)),
                Slot::Occupied { .. } => {}
            }
        }
        Err(TabulaError::TableFull)
    }

    /// Inserts a key-value pair, overwriting the value of a key already present.
    ///
    /// The entry count grows only when the key is new. An insertion that pushes the load
    /// factor above 2/3 rebuilds the table at [`GROWTH_FACTOR`] slots per entry.
    ///
    /// # Errors
    ///
    /// - [`TabulaError::TableFull`]: The probe sequence could not resolve to a slot.
    pub fn set(&mut self, key: K, value: V) -> Result<(), TabulaError> {
        let hash = self.build_hasher.hash_one(&key);
        let (idx, present) = self.probe(hash, &key)?;
        self.slots[idx] = Slot::Occupied { hash, key, value };
        if !present {
            self.len += 1;
        }
        if self.len * GROWTH_FACTOR > self.slots.len() * 2 {
            self.grow();
        }
        Ok(())
    }

    /// Get the value of a key.
    ///
    /// # Errors
    ///
    /// - [`TabulaError::KeyNotFound`]: The key is absent.
    /// - [`TabulaError::TableFull`]: The probe sequence could not resolve to a slot.
    pub fn get(&self, key: &K) -> Result<&V, TabulaError> {
        let hash = self.build_hasher.hash_one(key);
        let (idx, present) = self.probe(hash, key)?;
        match &self.slots[idx] {
            Slot::Occupied { value, .. } if present => Ok(value),
            _ => Err(TabulaError::KeyNotFound),
        }
    }

    /// Deletes a key, freeing its slot directly and shrinking the entry count.
    ///
    /// # Notes
    ///
    /// - No tombstone is left behind: an entry placed behind the freed slot by an earlier
    ///   collision becomes unreachable until it is set again.
    ///
    /// # Errors
    ///
    /// - [`TabulaError::KeyNotFound`]: The key is absent.
    /// - [`TabulaError::TableFull`]: The probe sequence could not resolve to a slot.
    pub fn delete(&mut self, key: &K) -> Result<(), TabulaError> {
        let hash = self.build_hasher.hash_one(key);
        let (idx, present) = self.probe(hash, key)?;
        if !present {
            return Err(TabulaError::KeyNotFound);
        }
        self.slots[idx] = Slot::Empty;
        self.len -= 1;
        Ok(())
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }
}

impl<K: Eq, V, S: BuildHasher> ProbeMap<K, V, S> {
    /// Get the number of slots in the table.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Rebuilds the table at [`GROWTH_FACTOR`] slots per live entry.
    ///
    /// Entries migrate with their stored hashes, so keys are not rehashed.
    fn grow(&mut self) {
        let capacity = self.len * GROWTH_FACTOR;
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Slot::Empty);
        for slot in mem::replace(&mut self.slots, slots) {
            let Slot::Occupied { hash, key, value } = slot else {
                continue;
            };
            let mut idx = (hash % capacity as u64) as usize;
            // The fresh array is at most a third full, so an empty slot is always ahead.
            while let Slot::Occupied { .. } = self.slots[idx] {
                idx = (idx + 1) % capacity;
            }
            self.slots[idx] = Slot::Occupied { hash, key, value };
        }
    }
}

impl<K, V, S> Table for ProbeMap<K, V, S>
where
    K: Eq,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    fn num_collisions(&self) -> usize {
        let capacity = self.slots.len() as u64;
        self.slots
            .iter()
            .enumerate()
            .filter(|(idx, slot)| match slot {
                Slot::Occupied { hash, .. } => (hash % capacity) as usize != *idx,
                Slot::Empty => false,
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probing::DEFAULT_CAPACITY;
    use rand::prelude::*;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashMap;
    use tabula_testing::data::PARROT_WORDS;
    use tabula_testing::{assert_table_invariants, Generate, NumParams};

    const SKETCH_WORDS: [&str; 8] = [
        "bloody",
        "beautiful",
        "bereft",
        "blue",
        "blues",
        "Bolton",
        "British",
        "British-Railways",
    ];

    #[test]
    fn test_new_table_is_empty() {
        let map = ProbeMap::<u64, u64>::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.capacity(), DEFAULT_CAPACITY);
        assert_eq!(map.load_factor(), 0.0);
    }

    #[test]
    fn test_set_then_get() {
        let mut map = ProbeMap::new();
        map.set("blue", 3).expect("load factor below one");
        assert_eq!(map.get(&"blue"), Ok(&3));
        assert_eq!(map.len(), 1);
        assert!(map.contains(&"blue"));
        assert!(!map.contains(&"bloody"));
    }

    #[test]
    fn test_set_overwrites_existing_key() {
        let mut map = ProbeMap::new();
        map.set("blue", 1).expect("load factor below one");
        map.set("blue", 9).expect("load factor below one");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"blue"), Ok(&9));
    }

    #[test]
    fn test_get_absent_key() {
        let map = ProbeMap::<&str, u64>::new();
        assert_eq!(map.get(&"bereft"), Err(TabulaError::KeyNotFound));
    }

    #[test]
    fn test_delete_absent_key() {
        let mut map = ProbeMap::<&str, u64>::new();
        assert_eq!(map.delete(&"bereft"), Err(TabulaError::KeyNotFound));
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_delete_then_reinsert() {
        let mut map = ProbeMap::new();
        map.set("blues", 4).expect("load factor below one");
        map.delete(&"blues").expect("key is present");
        assert_eq!(map.get(&"blues"), Err(TabulaError::KeyNotFound));
        assert_eq!(map.len(), 0);

        map.set("blues", 5).expect("load factor below one");
        assert_eq!(map.get(&"blues"), Ok(&5));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_sketch_scenario() {
        let mut map = ProbeMap::new();
        for (value, key) in SKETCH_WORDS.into_iter().enumerate() {
            map.set(key, value).expect("load factor below one");
        }

        // The sixth insertion crosses 2/3 of the initial eight slots.
        assert_eq!(map.capacity(), 18);
        assert_eq!(map.len(), 8);
        assert_eq!(map.get(&"British-Railways"), Ok(&7));
        assert_eq!(map.num_collisions(), 0);

        map.delete(&"beautiful").expect("key is present");
        assert_eq!(map.get(&"beautiful"), Err(TabulaError::KeyNotFound));
        assert_eq!(map.len(), 7);
        for (value, key) in SKETCH_WORDS.into_iter().enumerate() {
            if key == "beautiful" {
                continue;
            }
            assert_eq!(map.get(&key), Ok(&value));
        }
        assert_table_invariants(&map);
    }

    #[test]
    fn test_corpus_growth_keeps_load_factor_bounded() {
        let mut map = ProbeMap::new();
        for (value, word) in PARROT_WORDS.iter().enumerate() {
            map.set(*word, value).expect("load factor below one");
            assert!(
                map.len() * 3 <= map.capacity() * 2,
                "load factor exceeds 2/3 after inserting {:?}",
                word,
            );
        }

        // Two corpus words appear twice, so 75 insertions store 73 entries.
        assert_eq!(map.len(), 73);
        assert_eq!(map.capacity(), 165);
        assert_table_invariants(&map);

        for word in PARROT_WORDS {
            let value = PARROT_WORDS
                .iter()
                .rposition(|other| other == word)
                .expect("the word comes from the corpus");
            assert_eq!(map.get(word), Ok(&value));
        }
    }

    #[test]
    fn test_growth_preserves_entries() {
        let mut map = ProbeMap::new();
        for key in 0..6_u64 {
            map.set(key, key * 10).expect("load factor below one");
        }

        assert_eq!(map.capacity(), 18);
        assert_eq!(map.len(), 6);
        for key in 0..6_u64 {
            assert_eq!(map.get(&key), Ok(&(key * 10)));
        }
    }

    #[test]
    fn test_set_get_matches_model() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let mut map = ProbeMap::new();
        let mut model = HashMap::new();

        // A small key domain forces frequent overwrites.
        let key_params = NumParams::new(0, 299);
        for _ in 0..500 {
            let key = u64::generate(&mut rng, &key_params);
            let value: u32 = rng.random();
            map.set(key, value).expect("load factor below one");
            model.insert(key, value);
        }

        assert_eq!(map.len(), model.len());
        for key in 0..300_u64 {
            assert_eq!(map.get(&key).ok(), model.get(&key));
        }
    }

    #[test]
    fn test_with_hasher_accepts_other_hashers() {
        let mut map = ProbeMap::with_hasher(std::collections::hash_map::RandomState::new());
        map.set("Bolton", 5).expect("load factor below one");
        assert_eq!(map.get(&"Bolton"), Ok(&5));
    }

    #[test]
    fn test_debug_lists_entries() {
        let mut map = ProbeMap::new();
        map.set("blue", 3).expect("load factor below one");
        assert_eq!(format!("{:?}", map), r#"{"blue": 3}"#);
    }
}
