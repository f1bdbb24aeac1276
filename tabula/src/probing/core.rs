//! Declares core types for [`ProbeMap`].
use crate::hashing::fnv::FnvBuildHasher;
use std::fmt::{Debug, Formatter};
use std::hash::BuildHasher;

/// Number of slots a freshly constructed table starts with.
pub const DEFAULT_CAPACITY: usize = 8;

/// A slot of the table.
///
/// The empty state is a variant of its own rather than a reserved key or value, so no user
/// data can ever collide with it. An occupied slot carries the key's full hash next to the
/// entry, frozen at the time of storage.
pub enum Slot<K, V> {
    Empty,
    Occupied { hash: u64, key: K, value: V },
}

/// A dynamically sized hash table resolving collisions by linear probing.
///
/// Colliding entries spill forward into the next free slot, wrapping at the end of the
/// array. The table rebuilds itself into a larger array whenever an insertion pushes the
/// load factor above 2/3, which keeps probe chains short and guarantees the scan always
/// terminates.
///
/// # Guarantees
///
/// - The load factor never exceeds 2/3 once an insertion completes.
/// - A rebuild lands the load factor near 1/3 and preserves the entry count.
/// - Deletion frees the slot directly instead of leaving a tombstone.
///
/// # Examples
///
/// ```rust
/// use tabula::probing::ProbeMap;
/// use tabula_core::TabulaError;
///
/// let mut book_reviews = ProbeMap::new();
/// book_reviews.set("Grimms' Fairy Tales", "Masterpiece.")?;
/// book_reviews.set("Pride and Prejudice", "Very enjoyable.")?;
///
/// assert_eq!(book_reviews.get(&"Pride and Prejudice"), Ok(&"Very enjoyable."));
/// assert_eq!(book_reviews.get(&"Les Misérables"), Err(TabulaError::KeyNotFound));
/// # Ok::<(), TabulaError>(())
/// ```
pub struct ProbeMap<K: Eq, V, S: BuildHasher = FnvBuildHasher> {
    pub(super) slots: Vec<Slot<K, V>>,
    pub(super) len: usize,
    pub(super) build_hasher: S,
}

impl<K, V> Debug for Slot<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Empty => f.write_str("Empty"),
            Slot::Occupied { hash, key, value } => f
                .debug_struct("Occupied")
                .field("hash", hash)
                .field("key", key)
                .field("value", value)
                .finish(),
        }
    }
}

impl<K, V, S> Debug for ProbeMap<K, V, S>
where
    K: Eq + Debug,
    V: Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().filter_map(|slot| match slot {
                Slot::Occupied { key, value, .. } => Some((key, value)),
                Slot::Empty => None,
            }))
            .finish()
    }
}
