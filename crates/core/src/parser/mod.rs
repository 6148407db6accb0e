//! Signature parsing: splitter, grammar, argument lists.

pub mod arguments;
pub mod operators;
pub mod signature;
pub mod splitter;

pub use arguments::split_arguments;
pub use operators::is_operator_name;
pub use signature::{CONSTRUCTOR_NAME, parse};
