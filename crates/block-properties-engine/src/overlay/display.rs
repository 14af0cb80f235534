use std::fmt;

use serde::{Deserialize, Serialize};

use super::badge::BadgeWidget;
use crate::parsing::rope::Span;

/// How recognized property lists are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Style the list in place; the text stays visible and editable.
    #[default]
    Inline,
    /// Hide the list behind a compact badge.
    Badge,
}

/// Passive styling applied to inline marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineStyle {
    pub color: String,
    pub opacity: f32,
}

impl InlineStyle {
    pub const DEFAULT_COLOR: &'static str = "#888888";
    pub const DEFAULT_OPACITY: f32 = 0.6;
}

impl Default for InlineStyle {
    fn default() -> Self {
        Self {
            color: Self::DEFAULT_COLOR.to_string(),
            opacity: Self::DEFAULT_OPACITY,
        }
    }
}

/// What the host draws over one anchor span.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    Mark { class: &'static str, style: InlineStyle },
    Replace(BadgeWidget),
}

impl Decoration {
    pub const MARK_CLASS: &'static str = "block-property";

    pub fn mode(&self) -> DisplayMode {
        match self {
            Decoration::Mark { .. } => DisplayMode::Inline,
            Decoration::Replace(_) => DisplayMode::Badge,
        }
    }
}

/// One decorated property list for the current render pass.
///
/// The anchor runs from the opening `[` to one past the closing `]`; the
/// `^id` token before it is left alone.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUnit {
    pub anchor: Span,
    pub block_id: String,
    pub decoration: Decoration,
}

impl DisplayUnit {
    pub fn anchor_from(&self) -> usize {
        self.anchor.start
    }

    pub fn anchor_to(&self) -> usize {
        self.anchor.end
    }

    pub fn mode(&self) -> DisplayMode {
        self.decoration.mode()
    }
}

/// The derived display structure: units ordered by anchor, never overlapping.
///
/// Built whole by a rebuild and replaced whole by the next one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplaySet {
    units: Vec<DisplayUnit>,
}

impl DisplaySet {
    /// Appends `unit`, refusing anything that would break the ordering.
    pub(crate) fn push(&mut self, unit: DisplayUnit) -> bool {
        if let Some(last) = self.units.last()
            && unit.anchor.start < last.anchor.end
        {
            return false;
        }
        self.units.push(unit);
        true
    }

    pub fn units(&self) -> &[DisplayUnit] {
        &self.units
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DisplayUnit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn anchors(&self) -> Vec<Span> {
        self.units.iter().map(|u| u.anchor).collect()
    }

    /// Anchors whose decoration must be (re)drawn compared to `previous`,
    /// in order.
    ///
    /// A unit is reused only when `previous` has a unit at the same anchor
    /// with an equal decoration; badges compare by block id and full
    /// property list. Anchors present in `previous` but gone from this set
    /// are included so the host can clear them.
    pub fn changed_since(&self, previous: &DisplaySet) -> Vec<Span> {
        let mut out: Vec<Span> = self
            .units
            .iter()
            .filter(|u| {
                previous
                    .find(u.anchor)
                    .is_none_or(|p| p.decoration != u.decoration)
            })
            .map(|u| u.anchor)
            .collect();
        out.extend(
            previous
                .units
                .iter()
                .filter(|p| self.find(p.anchor).is_none())
                .map(|p| p.anchor),
        );
        out.sort();
        out
    }

    fn find(&self, anchor: Span) -> Option<&DisplayUnit> {
        self.units
            .binary_search_by(|u| u.anchor.cmp(&anchor))
            .ok()
            .map(|i| &self.units[i])
    }
}

impl<'a> IntoIterator for &'a DisplaySet {
    type Item = &'a DisplayUnit;
    type IntoIter = std::slice::Iter<'a, DisplayUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

/// One line per unit, e.g. `5..17 badge ^t1 "2" x: 1, y: 2`.
impl fmt::Display for DisplaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in &self.units {
            match &u.decoration {
                Decoration::Mark { class, style } => writeln!(
                    f,
                    "{}..{} inline ^{} .{class} {} {}",
                    u.anchor.start, u.anchor.end, u.block_id, style.color, style.opacity
                )?,
                Decoration::Replace(w) => writeln!(
                    f,
                    "{}..{} badge ^{} \"{}\" {}",
                    u.anchor.start,
                    u.anchor.end,
                    u.block_id,
                    w.count(),
                    w.title()
                )?,
            }
        }
        Ok(())
    }
}
