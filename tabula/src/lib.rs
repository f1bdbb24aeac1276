pub mod chaining;
pub mod hashing;
pub mod probing;
