use dotnetdomain_api::ConstructKind;
use std::fmt::Debug;

/// Decides how nested declarations compose into qualified names.
pub trait NamingConvention: Send + Sync + Debug {
    /// Separator placed between contributed segments.
    fn separator(&self) -> &str {
        "."
    }

    /// Whether an ancestor of `kind` adds its name to its descendants.
    fn contributes(&self, ancestor: ConstructKind) -> bool;

    /// Join root-first segments into one name.
    fn render(&self, segments: &[String]) -> String {
        segments.join(self.separator())
    }
}

/// Only namespaces and classes contribute. Structures, interfaces, delegates
/// and enumerations are skipped when their children are named.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyNaming;

impl NamingConvention for LegacyNaming {
    fn contributes(&self, ancestor: ConstructKind) -> bool {
        matches!(ancestor, ConstructKind::Namespace | ConstructKind::Class)
    }
}

/// Every container kind contributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymmetricNaming;

impl NamingConvention for SymmetricNaming {
    fn contributes(&self, ancestor: ConstructKind) -> bool {
        ancestor.is_container()
    }
}
