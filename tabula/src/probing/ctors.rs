//! Implements constructors for [`ProbeMap`].
use crate::hashing::fnv::FnvBuildHasher;
use crate::probing::{ProbeMap, Slot, DEFAULT_CAPACITY};
use std::hash::BuildHasher;

impl<K: Eq, V> ProbeMap<K, V> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] slots, addressed by the default
    /// FNV-1a hasher.
    pub fn new() -> Self {
        Self::with_hasher(FnvBuildHasher)
    }
}

impl<K: Eq, V, S: BuildHasher> ProbeMap<K, V, S> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] slots, addressed by the given
    /// hasher factory.
    ///
    /// # Parameters
    ///
    /// - `build_hasher`: The factory producing one hasher instance per key computation.
    pub fn with_hasher(build_hasher: S) -> Self {
        let mut slots = Vec::with_capacity(DEFAULT_CAPACITY);
        slots.resize_with(DEFAULT_CAPACITY, || Slot::Empty);
        Self {
            slots,
            len: 0,
            build_hasher,
        }
    }
}

impl<K: Eq, V> Default for ProbeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
