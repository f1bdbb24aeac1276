//! An open-addressing hash table with linear probing [(Cormen et al., 2009, ch. 11.4)].
//!
//! [(Cormen et al., 2009, ch. 11.4)]: https://mitpress.mit.edu/9780262033848/introduction-to-algorithms/
mod core;
pub use core::*;
mod ctors;
mod map;
