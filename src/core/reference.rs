use serde::{Deserialize, Serialize};

/// A named sequence centered on a biologically significant site, ready to be
/// registered in an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceWindow {
    /// Human-readable name (mutation or record name)
    pub name: String,

    /// Full sequence; the index window is taken around its midpoint
    #[serde(with = "sequence_string")]
    pub sequence: Vec<u8>,

    /// 1-based line of the defining record, when loaded from a text file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ReferenceWindow {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
            line: None,
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sequence length in bases
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

mod sequence_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(sequence: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(sequence))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_sequence_as_text() {
        let reference = ReferenceWindow::new("KRAS-G12D", "ACGTACGT");
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, r#"{"name":"KRAS-G12D","sequence":"ACGTACGT"}"#);

        let parsed: ReferenceWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reference);
        assert_eq!(parsed.len(), 8);
    }

    #[test]
    fn test_line_is_serialized_when_known() {
        let reference = ReferenceWindow::new("BRAF-V600E", "ACGT").with_line(4);
        let json = serde_json::to_string(&reference).unwrap();
        assert!(json.contains(r#""line":4"#));

        let parsed: ReferenceWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.line, Some(4));
    }
}
