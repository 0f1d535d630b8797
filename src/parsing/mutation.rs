use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::reference::ReferenceWindow;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("FASTA error: {0}")]
    Fasta(String),
}

/// One mutation definition: a site marker with its flanking sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
    pub name: String,
    pub left: String,
    pub center: String,
    pub right: String,
    /// 1-based line number in the source text
    pub line: usize,
}

impl MutationRecord {
    /// Full sequence handed to window preparation: `left + center + right`
    pub fn sequence(&self) -> String {
        let mut sequence =
            String::with_capacity(self.left.len() + self.center.len() + self.right.len());
        sequence.push_str(&self.left);
        sequence.push_str(&self.center);
        sequence.push_str(&self.right);
        sequence
    }

    pub fn to_reference(&self) -> ReferenceWindow {
        ReferenceWindow::new(self.name.clone(), self.sequence()).with_line(self.line)
    }
}

/// Parse a mutation definition file, optionally gzip-compressed (`.gz`).
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if it holds no usable records.
pub fn parse_mutation_file(path: &Path) -> Result<Vec<MutationRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    let mut content = String::new();
    if is_gzipped(path) {
        GzDecoder::new(file).read_to_string(&mut content)?;
    } else {
        std::io::BufReader::new(file).read_to_string(&mut content)?;
    }
    parse_mutation_text(&content)
}

/// Parse mutation definitions with comma-separated columns:
/// name, left flank, center, right flank.
///
/// Lines with fewer than four fields and lines whose first field starts with
/// `#` are skipped. Extra columns are ignored. Fields are trimmed.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if no records are found.
pub fn parse_mutation_text(text: &str) -> Result<Vec<MutationRecord>, ParseError> {
    let mut records = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_num = i + 1;
        let fields: Vec<&str> = line.split(',').collect();

        if fields.len() < 4 {
            if !line.trim().is_empty() {
                debug!("Skipping line {line_num}: fewer than 4 fields");
            }
            continue;
        }
        if fields[0].trim_start().starts_with('#') {
            continue;
        }

        records.push(MutationRecord {
            name: fields[0].trim().to_string(),
            left: fields[1].trim().to_string(),
            center: fields[2].trim().to_string(),
            right: fields[3].trim().to_string(),
            line: line_num,
        });
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No mutation records found".to_string(),
        ));
    }

    Ok(records)
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub(crate) fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}
