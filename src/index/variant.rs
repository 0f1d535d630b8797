use serde::Serialize;

/// A synthetic edit applied to a reference window. Positions are relative to
/// the window start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edit {
    Substitution {
        position: usize,
        base: char,
    },
    DoubleSubstitution {
        first: (usize, char),
        second: (usize, char),
    },
    /// The base at `position` is removed; the window gains the base before it
    Deletion {
        position: usize,
    },
    /// `base` is inserted at `position`; the first window base falls off
    Insertion {
        position: usize,
        base: char,
    },
}

impl Edit {
    /// Window positions touched by this edit
    pub fn positions(&self) -> Vec<usize> {
        match *self {
            Self::Substitution { position, .. }
            | Self::Deletion { position }
            | Self::Insertion { position, .. } => vec![position],
            Self::DoubleSubstitution { first, second } => vec![first.0, second.0],
        }
    }
}

/// A derived fingerprint together with the edit that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub edit: Edit,
    pub fingerprint: i64,
}

impl Variant {
    pub fn new(edit: Edit, fingerprint: i64) -> Self {
        Self { edit, fingerprint }
    }
}
