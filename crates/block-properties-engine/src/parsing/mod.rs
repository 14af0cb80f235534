//! # Property Parsing
//!
//! Recognizes block property syntax, `^id [key: value, ...]`, in any slice
//! of a document and reports each region with absolute document offsets.
//!
//! ## Modules
//!
//! - **`kinds`**: Delimiter constants (`^`, `[`, `]`, `:`, pair separators)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with a base offset
//! - **`types`**: `PropertyRegion` and `Property`
//! - **`parser`**: `parse_properties()` entry point
//! - **`rope`**: Spans, line iteration and slicing over `xi_rope::Rope`
//! - **`snapshot`**: Invariant checks and snapshot normalization for tests
//!
//! The parser is a pure function of `(base, text)`. It has no notion of
//! lines or viewports: callers decide which slice to hand it.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rope;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod tests;

pub use parser::{bracket_offset, parse_properties};
pub use types::{Property, PropertyRegion, join_properties};

use xi_rope::Rope;

/// Parses a whole rope in one call.
pub fn parse_document(rope: &Rope) -> Vec<PropertyRegion> {
    let text = rope.slice_to_cow(..);
    parse_properties(0, &text)
}
