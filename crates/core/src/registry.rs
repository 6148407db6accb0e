//! Cross-reference registry for one build.
//!
//! Keys are `(kind, fully-qualified name)`. Registration never overwrites; a
//! second registration of a key is returned to the caller as a
//! [`DuplicateRegistration`] and the first target is kept.

use dotnetdomain_api::{ConstructKind, DuplicateRegistration, ReferenceKey, TargetLocation};
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceRegistry {
    entries: IndexMap<ReferenceKey, TargetLocation>,
}

/// One listed registry row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, schemars::JsonSchema)]
pub struct RegistryEntry {
    pub kind: ConstructKind,
    pub name: String,
    pub target: TargetLocation,
}

impl ReferenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        kind: ConstructKind,
        name: impl Into<String>,
        target: TargetLocation,
    ) -> Result<(), DuplicateRegistration> {
        match self.entries.entry(ReferenceKey::new(kind, name)) {
            Entry::Occupied(existing) => Err(DuplicateRegistration {
                kind,
                name: existing.key().name.clone(),
                existing: existing.get().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(target);
                Ok(())
            }
        }
    }

    pub fn find(&self, kind: ConstructKind, name: &str) -> Option<&TargetLocation> {
        self.entries.get(&ReferenceKey::new(kind, name))
    }

    pub fn contains(&self, kind: ConstructKind, name: &str) -> bool {
        self.find(kind, name).is_some()
    }

    /// Every kind registered under `name`, in insertion order.
    pub fn find_any(&self, name: &str) -> Vec<(ConstructKind, &TargetLocation)> {
        self.entries
            .iter()
            .filter(|(key, _)| key.name == name)
            .map(|(key, target)| (key.kind, target))
            .collect()
    }

    /// First match for `name` trying `kinds` in preference order.
    pub fn resolve(
        &self,
        name: &str,
        kinds: &[ConstructKind],
    ) -> Option<(ConstructKind, &TargetLocation)> {
        kinds
            .iter()
            .find_map(|&kind| self.find(kind, name).map(|target| (kind, target)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ReferenceKey, &TargetLocation)> {
        self.entries.iter()
    }

    pub fn entries(&self) -> Vec<RegistryEntry> {
        self.entries
            .iter()
            .map(|(key, target)| RegistryEntry {
                kind: key.kind,
                name: key.name.clone(),
                target: target.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold `other` into this registry in its insertion order. Keys already
    /// present are kept; each rejected target is returned with its collision.
    pub fn merge(
        &mut self,
        other: ReferenceRegistry,
    ) -> Vec<(TargetLocation, DuplicateRegistration)> {
        let mut duplicates = Vec::new();
        for (key, target) in other.entries {
            if let Err(dup) = self.register(key.kind, key.name, target.clone()) {
                duplicates.push((target, dup));
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(doc: &str, line: usize, kind: ConstructKind, name: &str) -> TargetLocation {
        TargetLocation::new(doc, line, kind, name)
    }

    #[test]
    fn test_register_and_find() {
        let mut registry = ReferenceRegistry::new();
        let t = target("index", 1, ConstructKind::Class, "N.C");
        registry
            .register(ConstructKind::Class, "N.C", t.clone())
            .unwrap();

        assert_eq!(registry.find(ConstructKind::Class, "N.C"), Some(&t));
        assert!(registry.find(ConstructKind::Structure, "N.C").is_none());
        assert!(registry.find(ConstructKind::Class, "N").is_none());
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut registry = ReferenceRegistry::new();
        let first = target("a", 1, ConstructKind::Method, "C.M");
        let second = target("b", 9, ConstructKind::Method, "C.M");
        registry
            .register(ConstructKind::Method, "C.M", first.clone())
            .unwrap();

        let dup = registry
            .register(ConstructKind::Method, "C.M", second)
            .unwrap_err();
        assert_eq!(dup.existing, first);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find(ConstructKind::Method, "C.M"), Some(&first));
    }

    #[test]
    fn test_same_name_different_kind_is_not_duplicate() {
        let mut registry = ReferenceRegistry::new();
        registry
            .register(ConstructKind::Class, "X", target("a", 1, ConstructKind::Class, "X"))
            .unwrap();
        registry
            .register(
                ConstructKind::Namespace,
                "X",
                target("a", 2, ConstructKind::Namespace, "X"),
            )
            .unwrap();

        let kinds: Vec<_> = registry.find_any("X").into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![ConstructKind::Class, ConstructKind::Namespace]);
        let (kind, _) = registry
            .resolve("X", &[ConstructKind::Namespace, ConstructKind::Class])
            .unwrap();
        assert_eq!(kind, ConstructKind::Namespace);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let mut registry = ReferenceRegistry::new();
        for name in ["Z", "A", "M"] {
            registry
                .register(ConstructKind::Field, name, target("d", 1, ConstructKind::Field, name))
                .unwrap();
        }
        let names: Vec<&str> = registry.iter().map(|(key, _)| key.name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_merge_reports_collisions() {
        let mut left = ReferenceRegistry::new();
        left.register(ConstructKind::Class, "A", target("one", 1, ConstructKind::Class, "A"))
            .unwrap();

        let mut right = ReferenceRegistry::new();
        right
            .register(ConstructKind::Class, "A", target("two", 4, ConstructKind::Class, "A"))
            .unwrap();
        right
            .register(ConstructKind::Class, "B", target("two", 5, ConstructKind::Class, "B"))
            .unwrap();

        let duplicates = left.merge(right);
        assert_eq!(duplicates.len(), 1);
        let (rejected, dup) = &duplicates[0];
        assert_eq!(rejected.document, "two");
        assert_eq!(dup.name, "A");
        assert_eq!(dup.existing.document, "one");
        assert_eq!(left.len(), 2);
        assert_eq!(left.find(ConstructKind::Class, "A").unwrap().document, "one");
    }
}
