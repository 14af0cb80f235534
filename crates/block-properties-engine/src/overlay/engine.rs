use super::{
    build::build_decorations,
    display::{DisplayMode, DisplaySet, InlineStyle},
    hover::{HoverHit, query_at},
    view::{ViewState, ViewUpdate},
};
use crate::parsing::rope::Span;

/// Keeps a display structure in step with one attached text surface.
///
/// Lifecycle:
/// 1. [`attach`](Self::attach) builds decorations for the initial viewport
/// 2. [`update`](Self::update) rebuilds from scratch whenever the document
///    or the visible ranges change; [`reconfigure`](Self::reconfigure) does
///    the same after a settings change
/// 3. [`detach`](Self::detach) drops everything
///
/// The decorations are never patched in place. Each rebuild produces a new
/// [`DisplaySet`] that replaces the old one, and the set from the previous
/// pass is kept only so the host can ask what needs redrawing.
#[derive(Debug)]
pub struct Overlay {
    mode: DisplayMode,
    style: InlineStyle,
    decorations: DisplaySet,
    previous: DisplaySet,
    rebuilds: u64,
}

impl Overlay {
    pub fn attach(view: &ViewState, mode: DisplayMode, style: InlineStyle) -> Self {
        log::debug!("attaching {mode:?} overlay at version {}", view.version());
        let decorations = build_decorations(view, mode, &style);
        Self {
            mode,
            style,
            decorations,
            previous: DisplaySet::default(),
            rebuilds: 1,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    pub fn decorations(&self) -> &DisplaySet {
        &self.decorations
    }

    /// Number of full rebuilds since attachment, the initial one included.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Reacts to a surface event. Returns true if decorations were rebuilt.
    pub fn update(&mut self, view: &ViewState, update: &ViewUpdate) -> bool {
        if !update.needs_rebuild() {
            return false;
        }
        self.rebuild(view);
        true
    }

    /// Applies new settings and rebuilds.
    pub fn reconfigure(&mut self, view: &ViewState, mode: DisplayMode, style: InlineStyle) {
        if mode != self.mode {
            log::debug!("display mode {:?} -> {mode:?}", self.mode);
        }
        self.mode = mode;
        self.style = style;
        self.rebuild(view);
    }

    /// Anchors that differ from the previous pass and need redrawing.
    pub fn changed_anchors(&self) -> Vec<Span> {
        self.decorations.changed_since(&self.previous)
    }

    /// Hover lookup for the tooltip; read-only, independent of display mode.
    pub fn query_at(&self, view: &ViewState, pos: usize) -> Option<HoverHit> {
        query_at(view, pos)
    }

    pub fn detach(self) {
        log::debug!(
            "detaching overlay after {} rebuild(s), {} decoration(s) released",
            self.rebuilds,
            self.decorations.len()
        );
    }

    fn rebuild(&mut self, view: &ViewState) {
        let next = build_decorations(view, self.mode, &self.style);
        self.previous = std::mem::replace(&mut self.decorations, next);
        self.rebuilds += 1;
    }
}
