pub mod kind;
pub mod signature;
pub mod symbol;

pub use kind::*;
pub use signature::*;
pub use symbol::*;
