use serde::Serialize;
use std::collections::HashMap;

use crate::core::types::TargetId;

/// A fingerprint shared by two or more targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub fingerprint: i64,
    pub targets: Vec<TargetId>,
}

/// Mapping from fingerprint to the distinct targets that produce it.
///
/// Targets are kept in first-insertion order. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct HashRegistry {
    targets: HashMap<i64, Vec<TargetId>>,
}

impl HashRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `target` with `fingerprint`.
    ///
    /// Returns `false` if the pair was already present.
    pub fn insert(&mut self, fingerprint: i64, target: TargetId) -> bool {
        let entry = self.targets.entry(fingerprint).or_default();
        // Target lists are short; a linear scan beats a set here
        if entry.contains(&target) {
            return false;
        }
        entry.push(target);
        true
    }

    /// Targets registered under `fingerprint`, empty if none
    pub fn lookup(&self, fingerprint: i64) -> &[TargetId] {
        self.targets
            .get(&fingerprint)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every fingerprint with at least two targets, by ascending fingerprint
    pub fn collisions(&self) -> Vec<Collision> {
        let mut collisions: Vec<Collision> = self
            .targets
            .iter()
            .filter(|(_, targets)| targets.len() >= 2)
            .map(|(&fingerprint, targets)| Collision {
                fingerprint,
                targets: targets.clone(),
            })
            .collect();
        collisions.sort_by_key(|c| c.fingerprint);
        collisions
    }

    /// Fold `other` into this registry, appending its targets after ours.
    pub fn merge(&mut self, other: HashRegistry) {
        for (fingerprint, targets) in other.targets {
            for target in targets {
                self.insert(fingerprint, target);
            }
        }
    }

    /// Number of distinct fingerprints
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate over `(fingerprint, targets)` in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[TargetId])> {
        self.targets
            .iter()
            .map(|(&fingerprint, targets)| (fingerprint, targets.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent_per_target() {
        let mut registry = HashRegistry::new();
        assert!(registry.insert(42, TargetId(0)));
        assert!(!registry.insert(42, TargetId(0)));
        assert!(registry.insert(42, TargetId(1)));
        assert_eq!(registry.lookup(42), &[TargetId(0), TargetId(1)]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_missing_is_empty() {
        let registry = HashRegistry::new();
        assert!(registry.lookup(7).is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_collisions_require_two_targets() {
        let mut registry = HashRegistry::new();
        registry.insert(30, TargetId(2));
        registry.insert(30, TargetId(1));
        registry.insert(10, TargetId(0));
        registry.insert(10, TargetId(0));
        registry.insert(-5, TargetId(0));
        registry.insert(-5, TargetId(3));

        let collisions = registry.collisions();
        assert_eq!(collisions.len(), 2);
        assert_eq!(collisions[0].fingerprint, -5);
        assert_eq!(collisions[1].fingerprint, 30);
        assert_eq!(collisions[1].targets, vec![TargetId(2), TargetId(1)]);
    }

    #[test]
    fn test_merge_preserves_order_and_dedups() {
        let mut left = HashRegistry::new();
        left.insert(1, TargetId(0));
        left.insert(2, TargetId(0));

        let mut right = HashRegistry::new();
        right.insert(1, TargetId(1));
        right.insert(1, TargetId(0));
        right.insert(3, TargetId(1));

        left.merge(right);
        assert_eq!(left.lookup(1), &[TargetId(0), TargetId(1)]);
        assert_eq!(left.lookup(3), &[TargetId(1)]);
        assert_eq!(left.len(), 3);
    }
}
