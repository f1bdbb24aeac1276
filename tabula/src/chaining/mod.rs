//! A fixed-capacity hash table resolving collisions by separate chaining, as described in
//! [CLRS (2009), ch. 11.2].
//!
//! [CLRS (2009), ch. 11.2]: https://mitpress.mit.edu/9780262033848/introduction-to-algorithms/
mod list;
pub use list::*;
mod table;
pub use table::*;
