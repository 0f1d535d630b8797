//! Loaders that turn reference definitions into [`ReferenceWindow`]s.
//!
//! - **Mutation files**: comma-separated `name, left, center, right` records,
//!   plain or gzip-compressed
//! - **FASTA files**: one pre-centered window per record
//!
//! ## Example
//!
//! ```rust,no_run
//! use mutation_hash::parsing::parse_references_file;
//! use std::path::Path;
//!
//! let references = parse_references_file(Path::new("mutations.csv")).unwrap();
//! for reference in &references {
//!     println!("{}: {} bases", reference.name, reference.len());
//! }
//! ```
//!
//! [`ReferenceWindow`]: crate::core::reference::ReferenceWindow

use std::path::Path;

use crate::core::reference::ReferenceWindow;

pub mod fasta;
pub mod mutation;

pub use mutation::ParseError;

/// Load references from `path`, choosing the format from its extension.
///
/// FASTA extensions are read as FASTA; anything else is read as a mutation
/// definition file.
///
/// # Errors
///
/// Returns any `ParseError` from the selected loader.
pub fn parse_references_file(path: &Path) -> Result<Vec<ReferenceWindow>, ParseError> {
    if fasta::is_fasta_file(path) {
        fasta::parse_fasta_file(path)
    } else {
        let records = mutation::parse_mutation_file(path)?;
        Ok(records.iter().map(mutation::MutationRecord::to_reference).collect())
    }
}
