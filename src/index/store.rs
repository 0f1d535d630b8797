use serde::Serialize;
use tracing::debug;

use crate::core::hash::fingerprint;
use crate::core::reference::ReferenceWindow;
use crate::core::types::{IndexConfig, TargetId};
use crate::core::window::{IndexError, Window};
use crate::index::registry::{Collision, HashRegistry};
use crate::index::variant::Variant;
use crate::index::{indel, substitution};

/// Run both enumerators over a prepared window, handing the origin and every
/// derived variant to `emit`. The origin is reported with `None`.
pub fn for_each_fingerprint<F>(window: &Window<'_>, allow_two_substitutions: bool, mut emit: F)
where
    F: FnMut(i64, Option<Variant>),
{
    emit(window.origin(), None);
    substitution::enumerate(window, allow_two_substitutions, |v| {
        emit(v.fingerprint, Some(v));
    });
    indel::enumerate(window, |v| emit(v.fingerprint, Some(v)));
}

/// Every variant derived from `sequence` under `config`, with the window's
/// origin fingerprint.
///
/// # Errors
///
/// Returns `IndexError::InputTooShort` if the sequence cannot hold a window.
pub fn variants(sequence: &[u8], config: &IndexConfig) -> Result<(i64, Vec<Variant>), IndexError> {
    let window = Window::prepare(sequence, config.effective_window())?;
    let mut variants = Vec::new();
    for_each_fingerprint(&window, config.allow_two_substitutions, |_, variant| {
        variants.extend(variant);
    });
    Ok((window.origin(), variants))
}

/// Insert every fingerprint of `sequence` into `registry` under `target`.
///
/// Returns the number of fingerprints emitted, duplicates included.
pub(crate) fn register_into(
    registry: &mut HashRegistry,
    config: &IndexConfig,
    sequence: &[u8],
    target: TargetId,
) -> Result<usize, IndexError> {
    let window = Window::prepare(sequence, config.effective_window())?;
    let mut emitted = 0;
    for_each_fingerprint(&window, config.allow_two_substitutions, |fp, _| {
        registry.insert(fp, target);
        emitted += 1;
    });
    Ok(emitted)
}

/// Where a target came from: its name and input position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetInfo {
    pub name: String,
    /// 1-based source line, when the reference came from a text file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl TargetInfo {
    pub fn from_reference(reference: &ReferenceWindow) -> Self {
        Self {
            name: reference.name.clone(),
            line: reference.line,
        }
    }
}

/// Error-tolerant fingerprint index over registered reference windows.
///
/// Build it once, then query it read-only; nothing is ever removed.
#[derive(Debug, Clone)]
pub struct MutationIndex {
    config: IndexConfig,
    registry: HashRegistry,
    /// Every reference offered through `add_reference` or the builder,
    /// indexed by target id. Includes references too short to register.
    targets: Vec<TargetInfo>,
}

impl MutationIndex {
    /// Create an empty index
    pub fn new(config: IndexConfig) -> Self {
        Self {
            config,
            registry: HashRegistry::new(),
            targets: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        config: IndexConfig,
        registry: HashRegistry,
        targets: Vec<TargetInfo>,
    ) -> Self {
        Self {
            config,
            registry,
            targets,
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Length of the windows this index fingerprints
    pub fn window_len(&self) -> usize {
        self.config.effective_window()
    }

    /// Register `sequence` under a caller-chosen `target`.
    ///
    /// The exact window and all its edit variants become matchable. On error
    /// the index is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::InputTooShort` if `sequence` is shorter than the
    /// window length plus two.
    pub fn register(&mut self, sequence: &[u8], target: TargetId) -> Result<(), IndexError> {
        let emitted = register_into(&mut self.registry, &self.config, sequence, target)?;
        debug!("Registered {} with {} fingerprints", target, emitted);
        Ok(())
    }

    /// Register a named reference under the next target id, which is its
    /// ordinal among all references offered so far.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::InputTooShort` if the reference sequence cannot
    /// hold a window. The id is still consumed so later ordinals stay aligned
    /// with the input, but no fingerprint is registered.
    pub fn add_reference(&mut self, reference: &ReferenceWindow) -> Result<TargetId, IndexError> {
        let target = TargetId::new(self.targets.len() as u32);
        self.targets.push(TargetInfo::from_reference(reference));
        self.register(&reference.sequence, target)?;
        Ok(target)
    }

    /// Targets whose window or edit variants hash to `fingerprint`
    pub fn lookup(&self, fingerprint: i64) -> &[TargetId] {
        self.registry.lookup(fingerprint)
    }

    /// Targets matching an observed window of `window_len()` bases
    pub fn lookup_window(&self, bases: &[u8]) -> &[TargetId] {
        self.lookup(fingerprint(bases))
    }

    /// Fingerprints shared by two or more targets, by ascending fingerprint
    pub fn collisions(&self) -> Vec<Collision> {
        self.registry.collisions()
    }

    /// Name and source line recorded for `target`, if any
    pub fn target(&self, target: TargetId) -> Option<&TargetInfo> {
        self.targets.get(target.index())
    }

    /// Name recorded for `target`, if any
    pub fn target_name(&self, target: TargetId) -> Option<&str> {
        self.target(target).map(|info| info.name.as_str())
    }

    /// Number of references offered, registered or not
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Number of distinct fingerprints
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn registry(&self) -> &HashRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_too_short_leaves_index_untouched() {
        let mut index = MutationIndex::new(IndexConfig::new(10, true));
        let err = index.register(b"ATCGATCGAT", TargetId(0)).unwrap_err();
        assert!(matches!(
            err,
            IndexError::InputTooShort {
                length: 10,
                required: 12
            }
        ));
        assert!(index.is_empty());
    }

    #[test]
    fn test_small_window_fingerprints() {
        // Window "ACGT", only position 0 is editable. Every indel at 0
        // coincides with the origin or a substitution.
        let mut index = MutationIndex::new(IndexConfig::new(4, false));
        index.register(b"GACGTC", TargetId(0)).unwrap();

        let origin = fingerprint(b"ACGT");
        let expected = [origin, fingerprint(b"TCGT"), fingerprint(b"CCGT"), fingerprint(b"GCGT")];
        assert_eq!(index.len(), expected.len());
        for fp in expected {
            assert_eq!(index.lookup(fp), &[TargetId(0)]);
        }
    }

    #[test]
    fn test_register_twice_keeps_single_entry() {
        let mut index = MutationIndex::new(IndexConfig::default());
        let sequence = b"TTGACCTGATCGGATCCAGTCAGGACTTAGCAGTCCATGACCGATACGTACGGATCGTTACG";
        index.register(sequence, TargetId(3)).unwrap();
        let size = index.len();
        index.register(sequence, TargetId(3)).unwrap();
        assert_eq!(index.len(), size);

        let window = Window::prepare(sequence, 50).unwrap();
        assert_eq!(index.lookup(window.origin()), &[TargetId(3)]);
        assert_eq!(index.lookup_window(window.bases()), &[TargetId(3)]);
        assert!(index.collisions().is_empty());
    }

    #[test]
    fn test_add_reference_ids_follow_input_order() {
        let mut index = MutationIndex::new(IndexConfig::new(10, false));
        let a = index
            .add_reference(&ReferenceWindow::new("first", "ACGTACGTACGTAC").with_line(1))
            .unwrap();
        let size = index.len();
        assert!(index
            .add_reference(&ReferenceWindow::new("short", "ACGT").with_line(2))
            .is_err());
        assert_eq!(index.len(), size);
        let b = index
            .add_reference(&ReferenceWindow::new("second", "TTGCATGCAAGCTT").with_line(3))
            .unwrap();

        assert_eq!(a, TargetId(0));
        assert_eq!(b, TargetId(2));
        assert_eq!(index.target_name(b), Some("second"));
        assert_eq!(index.target(b).and_then(|t| t.line), Some(3));
        assert_eq!(index.target_count(), 3);
    }

    #[test]
    fn test_variants_report_origin_separately() {
        let config = IndexConfig::new(10, false);
        let (origin, variants) = variants(b"CGATTACAGCTAGG", &config).unwrap();
        assert_eq!(origin, fingerprint(b"ATTACAGCTA"));
        assert!(!variants.is_empty());
        assert!(variants.iter().all(|v| v.fingerprint != origin));
    }
}
