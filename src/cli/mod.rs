//! Command-line interface for mutation-hash.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **collisions**: Build the index and list fingerprints shared by several references
//! - **query**: Report which references match an observed window
//! - **variants**: List the edit variants derived from one reference
//!
//! ## Usage
//!
//! ```text
//! # Ambiguous fingerprints among a mutation list
//! mutation-hash collisions mutations.csv
//!
//! # Single-substitution index over 40-base windows, JSON output
//! mutation-hash collisions mutations.csv --window 40 --single-substitution --format json
//!
//! # Does this read window match any mutation?
//! mutation-hash query mutations.csv ACCTGATCGGATCCAGTCAGGACTTAGCAGTCCATGACCGATACGTACGG
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::reference::ReferenceWindow;
use crate::core::types::{IndexConfig, TargetId};
use crate::index::builder::{BuildSummary, IndexBuilder};
use crate::index::store::MutationIndex;
use crate::parsing;

pub mod collisions;
pub mod query;
pub mod variants;

#[derive(Parser)]
#[command(name = "mutation-hash")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Error-tolerant fingerprint index for mutation-centered sequence windows")]
#[command(
    long_about = "mutation-hash fingerprints short windows centered on known mutation sites.\n\nEach window is indexed together with every fingerprint reachable by up to two substitutions or a single one-base indel outside the protected center, so an observed read window can be matched with a single lookup."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List fingerprints shared by two or more references
    Collisions(collisions::CollisionsArgs),

    /// Match an observed window against the index
    Query(query::QueryArgs),

    /// List the edit variants derived from one reference
    Variants(variants::VariantsArgs),
}

/// Index construction options shared by all commands
#[derive(clap::Args)]
pub struct IndexArgs {
    /// Reference definitions: mutation CSV (name,left,center,right) or FASTA, optionally gzipped
    #[arg(required = true)]
    pub input: PathBuf,

    /// Window length (at most 50)
    #[arg(short, long, default_value = "50")]
    pub window: usize,

    /// Only allow one substitution per variant
    #[arg(long)]
    pub single_substitution: bool,

    /// Number of worker threads (0 = rayon default)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,
}

impl IndexArgs {
    pub fn config(&self) -> IndexConfig {
        IndexConfig::new(self.window, !self.single_substitution)
    }

    /// Load the input references
    pub fn load_references(&self) -> anyhow::Result<Vec<ReferenceWindow>> {
        Ok(parsing::parse_references_file(&self.input)?)
    }

    /// Build an index over already-loaded references
    pub fn build_from(&self, references: &[ReferenceWindow]) -> (MutationIndex, BuildSummary) {
        if self.threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .build_global()
                .ok(); // Ignore error if already initialized
        }
        IndexBuilder::new(self.config()).build(references)
    }

    /// Load the input references and build an index over them
    pub fn build_index(&self) -> anyhow::Result<(MutationIndex, BuildSummary)> {
        let references = self.load_references()?;
        Ok(self.build_from(&references))
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Render a target for reports, falling back to its id
pub(crate) fn target_label(index: &MutationIndex, target: TargetId) -> String {
    index
        .target_name(target)
        .map_or_else(|| target.to_string(), str::to_string)
}

/// JSON view of a target: id, name and source line when known
pub(crate) fn target_json(index: &MutationIndex, target: TargetId) -> serde_json::Value {
    let mut value = serde_json::json!({
        "id": target.0,
        "name": target_label(index, target),
    });
    if let Some(line) = index.target(target).and_then(|t| t.line) {
        value["line"] = serde_json::json!(line);
    }
    value
}

/// Comma-joined target ids for TSV columns
pub(crate) fn join_ids(targets: &[TargetId]) -> String {
    targets
        .iter()
        .map(|t| t.0.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// One text report line for a target: `#id`, name, and source line when known
pub(crate) fn target_row(index: &MutationIndex, target: TargetId) -> String {
    match index.target(target).and_then(|t| t.line) {
        Some(line) => format!("{}\t{}\tline {}", target, target_label(index, target), line),
        None => format!("{}\t{}", target, target_label(index, target)),
    }
}
