pub mod config;
pub mod error;
pub mod logging;

pub mod build;
pub mod outline;
pub mod parser;
pub mod registry;
pub mod tree;

pub use build::{Build, BuildReport, SourceDocument, build_document, collect_documents};
pub use config::{BuildConfig, NestingRule};
pub use error::{BuildError, Result};
pub use registry::{ReferenceRegistry, RegistryEntry};
pub use tree::{DeclarationTree, NodeId, ObjectNode};
