pub mod error;
pub mod models;

// Re-export commonly used types
pub use error::{
    BracketError, DomainError, DuplicateRegistration, ParseFailure, SignatureError,
    UnknownKind,
};
pub use models::*;
