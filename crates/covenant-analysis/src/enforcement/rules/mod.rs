//! Rule output types.

pub mod types;

pub use types::ViolationRecord;
