use serde::{Deserialize, Serialize};

/// Handle identifying which reference window a fingerprint belongs to.
///
/// Ids are dense ordinals assigned in registration order, so they double as
/// indices into the index's name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u32);

impl TargetId {
    pub fn new(ordinal: u32) -> Self {
        Self(ordinal)
    }

    /// Position of this target in registration order
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The four bases that substitutions and insertions may introduce, in
/// enumeration order.
pub const EDIT_BASES: [u8; 4] = [b'A', b'T', b'C', b'G'];

/// Largest supported window. Contributions grow as `2^(position+1)`, and 50
/// positions keep every derived fingerprint inside `i64`.
pub const MAX_WINDOW: usize = 50;

/// Number of central positions never touched by a synthetic edit.
pub const PROTECTED_ZONE_WIDTH: usize = 3;

/// Configuration for building a mutation index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Requested window length; clamped to `1..=MAX_WINDOW`
    pub window: usize,
    /// Also enumerate pairs of substitutions
    pub allow_two_substitutions: bool,
}

impl IndexConfig {
    pub fn new(window: usize, allow_two_substitutions: bool) -> Self {
        Self {
            window,
            allow_two_substitutions,
        }
    }

    /// Window length actually used for preparation
    #[must_use]
    pub fn effective_window(&self) -> usize {
        self.window.clamp(1, MAX_WINDOW)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            window: MAX_WINDOW,
            allow_two_substitutions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_window_clamps() {
        assert_eq!(IndexConfig::new(10, true).effective_window(), 10);
        assert_eq!(IndexConfig::new(200, true).effective_window(), MAX_WINDOW);
        assert_eq!(IndexConfig::new(0, false).effective_window(), 1);
    }

    #[test]
    fn test_default_config() {
        let config = IndexConfig::default();
        assert_eq!(config.window, 50);
        assert!(config.allow_two_substitutions);
    }

    #[test]
    fn test_target_id_ordering() {
        assert!(TargetId::new(1) < TargetId::new(2));
        assert_eq!(TargetId::new(7).index(), 7);
        assert_eq!(TargetId::new(3).to_string(), "#3");
    }
}
