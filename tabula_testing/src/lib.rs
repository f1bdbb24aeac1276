#![allow(dead_code)]
#![allow(unused_imports)]

pub mod stat;
pub use stat::*;

pub mod generate;
pub use generate::*;

pub mod table;
pub use table::*;

pub mod data;
