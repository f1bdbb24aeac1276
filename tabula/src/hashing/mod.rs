//! Routines for deriving slot indices from keys: string-to-integer key derivation and the
//! two classical integer-to-slot schemes from [CLRS (2009), ch. 11.3], plus the default
//! hasher of the open-addressing table.
//!
//! [CLRS (2009), ch. 11.3]: https://mitpress.mit.edu/9780262033848/introduction-to-algorithms/
pub mod division;
pub mod fnv;
pub mod method;
pub mod multiplication;
pub mod radix;
