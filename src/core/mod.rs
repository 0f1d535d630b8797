//! Core data types and the positional hash.
//!
//! - [`TargetId`]: Handle identifying a registered reference window
//! - [`IndexConfig`]: Window length and substitution mode for an index
//! - [`ReferenceWindow`]: A named sequence centered on a site of interest
//! - [`Window`]: The prepared, weighted window used by the enumerators
//!
//! ## Fingerprints
//!
//! Each base has a fixed value and contributes `value * 2^(position + 1)`:
//!
//! | Base  | Value |
//! |-------|-------|
//! | A     | 517   |
//! | T     | 433   |
//! | C     | 1123  |
//! | G     | 127   |
//! | N     | 1     |
//! | other | 0     |
//!
//! A window's fingerprint is the sum of its contributions. Equal fingerprints
//! are a necessary, not sufficient, condition for equal windows.
//!
//! [`TargetId`]: types::TargetId
//! [`IndexConfig`]: types::IndexConfig
//! [`ReferenceWindow`]: reference::ReferenceWindow
//! [`Window`]: window::Window

pub mod hash;
pub mod reference;
pub mod types;
pub mod window;
