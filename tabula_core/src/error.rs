//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabulaError {
    /// Returned by lookup and removal operations of the open-addressing table when no stored
    /// entry matches the requested key.
    #[error("Key is not present in the table.")]
    KeyNotFound,
    /// Means that a probe sequence scanned the whole container without resolving to a slot.
    /// Cannot occur as long as the resize policy keeps the load factor below 1, so observing
    /// it indicates a violated invariant rather than a recoverable condition.
    #[error("Probe sequence exhausted the container without resolving to a slot.")]
    TableFull,
    /// Might occur during construction of a hash table and means that a configuration
    /// parameter is outside of its valid range.
    #[error("Invalid construction parameter: {0}.")]
    InvalidParameter(&'static str),
}
