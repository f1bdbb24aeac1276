//! The [FNV-1a] hash function, the default hasher of the open-addressing table.
//!
//! The open-addressing table hashes generic keys through [`core::hash::Hash`], which needs a
//! concrete [`core::hash::Hasher`] behind it. FNV-1a fits a pedagogical table well: a
//! two-line loop, no seed material, and fully deterministic output across runs.
//!
//! [FNV-1a]: http://www.isthe.com/chongo/tech/comp/fnv/
use core::hash::{BuildHasher, Hasher};

/// Fowler-Noll-Vo (FNV-1a) non-cryptographic hash function over a 64-bit state.
#[derive(Debug, Copy, Clone)]
pub struct FnvHasher {
    hash: u64,
}

impl FnvHasher {
    const FNV_PRIME: u64 = 0x100000001B3;
    const FNV_OFFSET_BASIS: u64 = 0xCBF29CE484222325;

    /// Creates a new [`FnvHasher`], initialized with the FNV offset basis.
    pub fn new() -> Self {
        Self {
            hash: FnvHasher::FNV_OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash ^= *byte as u64;
            self.hash = self.hash.wrapping_mul(Self::FNV_PRIME);
        }
    }
}

/// Builder for [`FnvHasher`].
#[derive(Debug, Copy, Clone, Default)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher::new()
    }
}
