use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::reference::ReferenceWindow;
use crate::core::types::{IndexConfig, TargetId};
use crate::index::registry::HashRegistry;
use crate::index::store::{register_into, MutationIndex, TargetInfo};

/// Outcome counts of an index build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    /// References registered in the index
    pub registered: usize,
    /// Names of references too short to hold a window
    pub skipped: Vec<String>,
    /// Distinct fingerprints in the finished index
    pub fingerprints: usize,
}

/// Builds a `MutationIndex` from a batch of references.
///
/// Registration of one reference never depends on another, so the batch can
/// be processed across rayon workers: each reference fills its own registry
/// and the registries are merged in input order, giving the same index as a
/// sequential build.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    config: IndexConfig,
    parallel: bool,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig) -> Self {
        Self {
            config,
            parallel: true,
        }
    }

    /// Register references on the current thread only
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Build an index over `references`.
    ///
    /// Each reference's target id is its position in `references`, so ids map
    /// back to input records even when some are skipped. References shorter
    /// than the window length plus two are skipped with a warning.
    pub fn build(&self, references: &[ReferenceWindow]) -> (MutationIndex, BuildSummary) {
        let required = self.config.effective_window() + 2;
        let mut accepted: Vec<(usize, &ReferenceWindow)> = Vec::with_capacity(references.len());
        let mut summary = BuildSummary::default();

        for (ordinal, reference) in references.iter().enumerate() {
            if reference.len() < required {
                warn!(
                    "Skipping {}: sequence has {} bases, at least {} required",
                    reference.name,
                    reference.len(),
                    required
                );
                summary.skipped.push(reference.name.clone());
            } else {
                accepted.push((ordinal, reference));
            }
        }

        let registry = if self.parallel {
            accepted
                .par_iter()
                .map(|&(ordinal, reference)| self.registry_for(ordinal, reference))
                .reduce(HashRegistry::new, |mut left, right| {
                    left.merge(right);
                    left
                })
        } else {
            let mut registry = HashRegistry::new();
            for &(ordinal, reference) in &accepted {
                registry.merge(self.registry_for(ordinal, reference));
            }
            registry
        };

        summary.registered = accepted.len();
        summary.fingerprints = registry.len();
        info!(
            "Indexed {} references into {} fingerprints ({} skipped)",
            summary.registered,
            summary.fingerprints,
            summary.skipped.len()
        );

        let targets = references.iter().map(TargetInfo::from_reference).collect();
        (
            MutationIndex::from_parts(self.config, registry, targets),
            summary,
        )
    }

    fn registry_for(&self, ordinal: usize, reference: &ReferenceWindow) -> HashRegistry {
        let mut registry = HashRegistry::new();
        // Length was checked when the reference was accepted
        if let Err(e) = register_into(
            &mut registry,
            &self.config,
            &reference.sequence,
            TargetId::new(ordinal as u32),
        ) {
            warn!("Skipping {}: {}", reference.name, e);
        }
        registry
    }
}
