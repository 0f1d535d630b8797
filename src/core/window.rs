use thiserror::Error;

use crate::core::hash::contribution;
use crate::core::types::{MAX_WINDOW, PROTECTED_ZONE_WIDTH};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Sequence too short: {length} bases, at least {required} required")]
    InputTooShort { length: usize, required: usize },
}

/// A fixed-length window centered on a reference's significant site, with
/// its per-position contributions and their prefix sums.
///
/// The window borrows the full source sequence because the deletion variant
/// needs the base immediately before the window start.
#[derive(Debug, Clone)]
pub struct Window<'a> {
    source: &'a [u8],
    start: usize,
    center: usize,
    len: usize,
    contributions: [i64; MAX_WINDOW],
    accum: [i64; MAX_WINDOW],
    origin: i64,
}

impl<'a> Window<'a> {
    /// Select the `window`-long slice centered on the midpoint of `source`.
    ///
    /// `window` is clamped to `1..=MAX_WINDOW`.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::InputTooShort` if `source` is shorter than the
    /// clamped window plus two.
    pub fn prepare(source: &'a [u8], window: usize) -> Result<Self, IndexError> {
        let window = window.clamp(1, MAX_WINDOW);

        let required = window + 2;
        if source.len() < required {
            return Err(IndexError::InputTooShort {
                length: source.len(),
                required,
            });
        }

        // center >= window/2 + 1, so start >= 1 and a base before the window exists
        let center = source.len() / 2;
        let start = center - window / 2;

        let mut contributions = [0_i64; MAX_WINDOW];
        let mut accum = [0_i64; MAX_WINDOW];
        let mut origin = 0_i64;
        for (position, &base) in source[start..start + window].iter().enumerate() {
            contributions[position] = contribution(base, position);
            origin += contributions[position];
            accum[position] = origin;
        }

        Ok(Self {
            source,
            start,
            center,
            len: window,
            contributions,
            accum,
            origin,
        })
    }

    /// Number of positions in the window
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the first window base in the source sequence
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Midpoint of the source sequence
    #[must_use]
    pub fn center(&self) -> usize {
        self.center
    }

    /// The unmutated fingerprint
    #[must_use]
    pub fn origin(&self) -> i64 {
        self.origin
    }

    /// The window's bases
    #[must_use]
    pub fn bases(&self) -> &'a [u8] {
        &self.source[self.start..self.start + self.len]
    }

    /// Base at window `position`
    #[must_use]
    pub fn base(&self, position: usize) -> u8 {
        self.source[self.start + position]
    }

    /// Base immediately before the window in the source sequence
    #[must_use]
    pub fn base_before(&self) -> u8 {
        self.source[self.start - 1]
    }

    /// Contribution of the base at window `position`
    #[must_use]
    pub fn contribution(&self, position: usize) -> i64 {
        self.contributions[position]
    }

    /// Sum of contributions over positions `0..=position`
    #[must_use]
    pub fn accum(&self, position: usize) -> i64 {
        self.accum[position]
    }

    /// Whether window `position` lies in the protected center of the source
    #[must_use]
    pub fn is_protected(&self, position: usize) -> bool {
        let half = PROTECTED_ZONE_WIDTH / 2;
        let absolute = self.start + position;
        absolute + half >= self.center && absolute <= self.center + half
    }

    /// Window positions where synthetic edits may be placed, ascending
    pub fn editable_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&position| !self.is_protected(position))
    }
}
