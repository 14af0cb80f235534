use serde::Serialize;

use super::view::ViewState;
use crate::parsing::{Property, bracket_offset, parse_properties, rope::Span};

/// The property region under a hovered position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverHit {
    pub block_id: String,
    pub properties: Vec<Property>,
    /// From the opening `[` to one past the closing `]`.
    pub anchor: Span,
}

impl HoverHit {
    pub fn anchor_from(&self) -> usize {
        self.anchor.start
    }

    pub fn tooltip(&self) -> Tooltip {
        Tooltip {
            pos: self.anchor.start,
            above: true,
            header: format!("^{}", self.block_id),
            items: self.properties.clone(),
        }
    }
}

/// Presentation record for the hover tooltip: a `^id` header and one item
/// per pair, duplicates included, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub pos: usize,
    pub above: bool,
    pub header: String,
    pub items: Vec<Property>,
}

/// Finds the region whose `[anchor_from, to]` contains `pos`, both ends included.
///
/// Only the line holding `pos` is parsed, so a list spanning several lines
/// is not reported here.
pub fn query_at(view: &ViewState, pos: usize) -> Option<HoverHit> {
    let line = view.line_at(pos)?;
    let base = line.span.start;
    let text = line.content();

    parse_properties(base, text).into_iter().find_map(|region| {
        let from = bracket_offset(text, base, &region)?;
        let anchor = Span::new(from, region.to);
        anchor.contains_inclusive(pos).then(|| HoverHit {
            block_id: region.block_id,
            properties: region.properties,
            anchor,
        })
    })
}
