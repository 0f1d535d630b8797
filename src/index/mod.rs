//! Error-tolerant fingerprint index.
//!
//! For each registered reference window the index stores the exact
//! fingerprint plus every fingerprint produced by the allowed edits outside
//! the protected center:
//!
//! - one substitution, or two when enabled ([`substitution`])
//! - a single one-base deletion or insertion ([`indel`])
//!
//! An observed window then matches a reference carrying up to those edits by
//! a single hash lookup, without alignment. Distinct references may share a
//! derived fingerprint; [`MutationIndex::collisions`] reports those.
//!
//! ## Example
//!
//! ```rust
//! use mutation_hash::core::types::{IndexConfig, TargetId};
//! use mutation_hash::index::store::MutationIndex;
//!
//! let mut index = MutationIndex::new(IndexConfig::new(10, true));
//! index.register(b"TTGACCTGATCGGATC", TargetId(0)).unwrap();
//!
//! // The exact window matches
//! assert_eq!(index.lookup_window(b"ACCTGATCGG"), &[TargetId(0)]);
//! // So does one with a substitution near the window edge
//! assert_eq!(index.lookup_window(b"ACCTGATCGA"), &[TargetId(0)]);
//! ```

pub mod builder;
pub mod indel;
pub mod registry;
pub mod store;
pub mod substitution;
pub mod variant;
