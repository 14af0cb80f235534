use super::{
    badge::BadgeWidget,
    display::{Decoration, DisplayMode, DisplaySet, DisplayUnit, InlineStyle},
    view::ViewState,
};
use crate::parsing::{bracket_offset, parse_properties, rope::Span};

/// Builds the display structure for everything currently on screen.
///
/// Each visible range is sliced out of the document and parsed with its
/// start as the base offset. Every region becomes one unit anchored from
/// its `[` to its end, styled or replaced according to `mode`. Units come
/// out ordered because visible ranges are sorted and disjoint.
pub fn build_decorations(view: &ViewState, mode: DisplayMode, style: &InlineStyle) -> DisplaySet {
    let mut set = DisplaySet::default();

    for range in view.visible_ranges() {
        let text = view.slice(*range);
        for region in parse_properties(range.start, &text) {
            let Some(bracket) = bracket_offset(&text, range.start, &region) else {
                log::trace!("no opening bracket in region at {}", region.from);
                continue;
            };

            let decoration = match mode {
                DisplayMode::Badge => {
                    Decoration::Replace(BadgeWidget::new(&region.block_id, region.properties))
                }
                DisplayMode::Inline => Decoration::Mark {
                    class: Decoration::MARK_CLASS,
                    style: style.clone(),
                },
            };
            let unit = DisplayUnit {
                anchor: Span::new(bracket, region.to),
                block_id: region.block_id,
                decoration,
            };
            if !set.push(unit) {
                log::warn!("dropping out-of-order decoration at {bracket}");
            }
        }
    }

    log::debug!(
        "built {} {mode:?} decorations over {} visible range(s)",
        set.len(),
        view.visible_ranges().len()
    );
    set
}
