//! # Editor Overlay
//!
//! Derives a read-only display structure from the block properties that are
//! currently on screen, and answers hover queries.
//!
//! ## Flow
//!
//! ```text
//! ViewState --(edit / scroll)--> ViewUpdate --> Overlay::update
//!                                                   |
//!                        visible ranges --> parse --+--> DisplaySet
//! ```
//!
//! ## Modules
//!
//! - **`view`**: `ViewState`, the live surface (rope, visible ranges, version)
//! - **`display`**: `DisplayMode`, `Decoration`, `DisplayUnit`, `DisplaySet`
//! - **`badge`**: `BadgeWidget` and its host-facing `BadgeRecord`
//! - **`build`**: `build_decorations()`, the full rebuild over visible ranges
//! - **`hover`**: `query_at()` and the `Tooltip` record
//! - **`engine`**: `Overlay`, tying rebuilds to surface and settings events
//!
//! Everything runs synchronously on the thread that owns the surface. The
//! display set is only ever replaced whole, never mutated in place.

pub mod badge;
pub mod build;
pub mod display;
pub mod engine;
pub mod hover;
pub mod view;


pub use badge::{BadgeRecord, BadgeWidget};
pub use build::build_decorations;
pub use display::{Decoration, DisplayMode, DisplaySet, DisplayUnit, InlineStyle};
pub use engine::Overlay;
pub use hover::{HoverHit, Tooltip, query_at};
pub use view::{SurfaceError, ViewState, ViewUpdate};
