//! Core trait declarations for the whole project.

/// Read-only maintenance surface shared by the table variants.
///
/// Lookup is deliberately left to the concrete types: the open-addressing table reports a
/// missing key as an error while the chaining table treats it as a sentinel value, and a
/// common signature would erase that distinction.
pub trait Table {
    /// Get the number of stored entries.
    fn len(&self) -> usize;

    /// Check if the table is empty.
    fn is_empty(&self) -> bool;

    /// Get the load factor of the table.
    fn load_factor(&self) -> f64;

    /// Get the number of collisions in the table.
    ///
    /// For chaining this counts the nodes beyond the first in each chain; for open
    /// addressing, the occupied slots displaced from their home slot.
    fn num_collisions(&self) -> usize;
}
