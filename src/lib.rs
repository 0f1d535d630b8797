//! # mutation-hash
//!
//! An error-tolerant fingerprint index for short sequence windows centered on
//! known mutation sites.
//!
//! Detecting a known mutation in sequencing reads usually means aligning
//! reads against the mutated sequence. When the set of mutations is fixed,
//! that work can be done once up front instead: each mutation window is
//! fingerprinted together with every fingerprint its sequencing-error variants
//! would produce, and an observed read window is then tested with a single
//! hash lookup.
//!
//! ## Features
//!
//! - **Positional hash**: Weights double per position, so edits update a
//!   fingerprint in constant time
//! - **Substitution tolerance**: Up to two substituted bases outside the
//!   protected center
//! - **Indel tolerance**: A single one-base insertion or deletion
//! - **Collision report**: Fingerprints shared by distinct references are
//!   surfaced, not silently resolved
//! - **Parallel build**: References are registered across rayon workers
//!
//! ## Example
//!
//! ```rust
//! use mutation_hash::{IndexBuilder, IndexConfig, ReferenceWindow};
//!
//! let references = vec![
//!     ReferenceWindow::new("KRAS-G12D", "GTTGGAGCTGATGGCGTAGGCAAGAG"),
//!     ReferenceWindow::new("KRAS-G12V", "GTTGGAGCTGTTGGCGTAGGCAAGAG"),
//! ];
//!
//! let (index, summary) = IndexBuilder::new(IndexConfig::new(20, true)).build(&references);
//! assert_eq!(summary.registered, 2);
//!
//! for collision in index.collisions() {
//!     println!("{} shared by {:?}", collision.fingerprint, collision.targets);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Target ids, configuration, the positional hash and window preparation
//! - [`index`]: Variant enumerators, the hash registry and the index itself
//! - [`parsing`]: Loaders for mutation definition and FASTA files
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod index;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::hash::fingerprint;
pub use crate::core::reference::ReferenceWindow;
pub use crate::core::types::*;
pub use crate::core::window::IndexError;
pub use crate::index::builder::{BuildSummary, IndexBuilder};
pub use crate::index::registry::Collision;
pub use crate::index::store::{MutationIndex, TargetInfo};
