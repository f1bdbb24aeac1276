pub mod error;
pub use error::*;

pub mod table;
pub use table::*;
