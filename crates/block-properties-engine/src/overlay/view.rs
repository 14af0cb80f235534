use thiserror::Error;
use xi_rope::Rope;

use crate::parsing::rope::{LineRef, Span, line_at, slice_to_string};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("range {start}..{end} is outside the document (length {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },

    #[error("visible ranges {first:?} and {second:?} overlap")]
    OverlappingRanges { first: Span, second: Span },

    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// What changed on the surface since the previous event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewUpdate {
    pub doc_changed: bool,
    pub viewport_changed: bool,
    /// Document version after the change.
    pub version: u64,
}

impl ViewUpdate {
    /// True if derived decorations are stale.
    pub fn needs_rebuild(&self) -> bool {
        self.doc_changed || self.viewport_changed
    }
}

/// A live, editable text surface: the document plus what is on screen.
///
/// The document lives in an `xi_rope::Rope`. Visible ranges are kept
/// sorted and disjoint, and non-empty except for the single collapsed range
/// left behind when everything on screen is deleted. Every mutation reports
/// a [`ViewUpdate`] for the overlay to react to.
#[derive(Debug, Clone)]
pub struct ViewState {
    buffer: Rope,
    visible: Vec<Span>,
    version: u64,
}

impl ViewState {
    /// Creates a surface showing the whole of `text`.
    pub fn new(text: &str) -> Self {
        let buffer = Rope::from(text);
        let visible = whole(&buffer);
        Self {
            buffer,
            visible,
            version: 0,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SurfaceError> {
        Ok(Self::new(std::str::from_utf8(bytes)?))
    }

    pub fn doc(&self) -> &Rope {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn visible_ranges(&self) -> &[Span] {
        &self.visible
    }

    pub fn slice(&self, sp: Span) -> String {
        slice_to_string(&self.buffer, sp)
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// The line containing `pos`, or `None` if `pos` is past the end.
    pub fn line_at(&self, pos: usize) -> Option<LineRef> {
        line_at(&self.buffer, pos)
    }

    /// Replaces `range` with `text` and maps the visible ranges through the edit.
    pub fn replace(&mut self, range: Span, text: &str) -> Result<ViewUpdate, SurfaceError> {
        self.check_span(range)?;

        self.buffer.edit(range.range(), text);
        self.version += 1;

        let mapped = self
            .visible
            .iter()
            .map(|sp| Span {
                start: map_start(sp.start, range, text.len()),
                end: map_end(sp.end, range, text.len()),
            })
            .collect();
        self.visible = merge(mapped);

        Ok(ViewUpdate {
            doc_changed: true,
            viewport_changed: false,
            version: self.version,
        })
    }

    pub fn insert(&mut self, at: usize, text: &str) -> Result<ViewUpdate, SurfaceError> {
        self.replace(Span::new(at, at), text)
    }

    /// Sets what is on screen, e.g. after a scroll or resize.
    ///
    /// Ranges are sorted; touching ranges are fine, overlapping ones are
    /// rejected. Empty ranges are dropped.
    pub fn set_visible_ranges(
        &mut self,
        mut ranges: Vec<Span>,
    ) -> Result<ViewUpdate, SurfaceError> {
        for sp in &ranges {
            self.check_span(*sp)?;
        }
        ranges.retain(|sp| !sp.is_empty());
        ranges.sort();
        for w in ranges.windows(2) {
            if w[0].overlaps(w[1]) {
                return Err(SurfaceError::OverlappingRanges {
                    first: w[0],
                    second: w[1],
                });
            }
        }

        let viewport_changed = ranges != self.visible;
        self.visible = ranges;
        Ok(ViewUpdate {
            doc_changed: false,
            viewport_changed,
            version: self.version,
        })
    }

    fn check_span(&self, sp: Span) -> Result<(), SurfaceError> {
        let len = self.buffer.len();
        if sp.start > sp.end || sp.end > len {
            return Err(SurfaceError::OutOfBounds {
                start: sp.start,
                end: sp.end,
                len,
            });
        }
        for offset in [sp.start, sp.end] {
            if !self.buffer.is_codepoint_boundary(offset) {
                return Err(SurfaceError::NotCharBoundary { offset });
            }
        }
        Ok(())
    }
}

fn whole(rope: &Rope) -> Vec<Span> {
    vec![Span::new(0, rope.len())]
}

/// Maps a range start through an edit; starts inside the edit snap to its start.
fn map_start(pos: usize, edit: Span, inserted: usize) -> usize {
    if pos <= edit.start {
        pos
    } else if pos >= edit.end {
        pos - edit.len() + inserted
    } else {
        edit.start
    }
}

/// Maps a range end through an edit; ends inside the edit snap past the insertion.
fn map_end(pos: usize, edit: Span, inserted: usize) -> usize {
    if pos < edit.start {
        pos
    } else if pos >= edit.end {
        pos - edit.len() + inserted
    } else {
        edit.start + inserted
    }
}

/// Sorts, drops empty spans and merges touching or overlapping ones.
///
/// If every span collapsed, the first one survives so later insertions
/// there grow it back into view.
fn merge(mut spans: Vec<Span>) -> Vec<Span> {
    let collapsed = spans.first().copied();
    spans.retain(|sp| !sp.is_empty());
    if spans.is_empty() {
        return collapsed.into_iter().collect();
    }
    spans.sort();
    let mut out: Vec<Span> = Vec::with_capacity(spans.len());
    for sp in spans {
        match out.last_mut() {
            Some(last) if sp.start <= last.end => last.end = last.end.max(sp.end),
            _ => out.push(sp),
        }
    }
    out
}
