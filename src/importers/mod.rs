// Import module - turns one line of input into trades

pub mod json_operations;

pub use json_operations::{parse_operations, RawOperation};
