//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed regions to a stable `Snap` that renders
//!   one line per region for `insta` snapshots
//! - **`invariants`**: Runtime checks for parser correctness (regions in
//!   bounds, ordered, non-overlapping, non-empty, reproducible from their
//!   own text)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
