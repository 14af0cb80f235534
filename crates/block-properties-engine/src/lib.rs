pub mod overlay;
pub mod panel;
pub mod parsing;

// Re-export key types for easier usage
pub use overlay::{
    BadgeRecord, BadgeWidget, Decoration, DisplayMode, DisplaySet, DisplayUnit, HoverHit,
    InlineStyle, Overlay, SurfaceError, Tooltip, ViewState, ViewUpdate, build_decorations,
    query_at,
};
pub use panel::{CaretTarget, KeyCount, PanelBlock, PanelContent, count_keys, extract_blocks};
pub use parsing::{
    Property, PropertyRegion, join_properties, parse_document, parse_properties, rope::Span,
};
