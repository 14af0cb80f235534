use super::{
    cursor::Cursor,
    kinds::{BlockRef, PropertyList},
    rope::Span,
    types::{Property, PropertyRegion},
};

/// Parses every block property region in `s`.
///
/// # Arguments
/// - `base`: Document offset where `s` begins, added to every reported offset
/// - `s`: Any slice of the document (whole text, one line, a visible range)
///
/// # Slice Boundaries
/// Detection is best-effort within the slice. A region cut by either end of
/// `s` is simply not reported; callers that care re-slice and parse again.
///
/// # Returns
/// Regions in increasing `from` order, never overlapping. Malformed pairs
/// are skipped and candidates without a single valid pair are omitted.
pub fn parse_properties(base: usize, s: &str) -> Vec<PropertyRegion> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(region) = try_parse_region(&mut cur) {
            out.push(region);
            continue;
        }
        cur.bump();
    }

    out
}

/// Attempts to parse `^id [pairs]` at the current position.
///
/// On failure the cursor is restored so the caller can step one byte past
/// the marker and keep scanning.
fn try_parse_region(cur: &mut Cursor<'_>) -> Option<PropertyRegion> {
    if cur.peek() != Some(BlockRef::MARKER) {
        return None;
    }

    let saved = cur.clone();
    let from = cur.pos();
    cur.bump(); // ^

    let id = cur.eat_while(BlockRef::is_id_byte);
    if id.is_empty() {
        *cur = saved;
        return None;
    }

    cur.eat_while(PropertyList::is_gap);
    if !cur.eat(PropertyList::OPEN) {
        *cur = saved;
        return None;
    }

    let body = cur.eat_while(|b| b != PropertyList::CLOSE);
    if !cur.eat(PropertyList::CLOSE) {
        // Unclosed, or closed beyond the end of this slice.
        *cur = saved;
        return None;
    }

    let properties = parse_pairs(cur.text(body));
    if properties.is_empty() {
        log::trace!("skipping property list without pairs at {from}");
        *cur = saved;
        return None;
    }

    Some(PropertyRegion {
        block_id: cur.text(id).to_string(),
        properties,
        from,
        to: cur.pos(),
    })
}

/// Splits a list body into pairs, dropping malformed tokens one by one.
fn parse_pairs(body: &str) -> Vec<Property> {
    body.split(PropertyList::SEPARATORS)
        .filter_map(parse_pair)
        .collect()
}

/// Parses `key: value`. The key must be a single non-empty word; the value
/// is everything after the first colon, trimmed, and may be empty.
fn parse_pair(token: &str) -> Option<Property> {
    let (key, value) = token.split_once(PropertyList::KEY_VALUE)?;
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    Some(Property::new(key, value.trim()))
}

/// Offset of the opening `[` of `region`, looked up in the slice it came from.
///
/// `s` must be the slice that produced `region` and `base` its document
/// offset. Returns `None` if the region does not lie inside `s` or has no
/// bracket; callers skip such regions.
pub fn bracket_offset(s: &str, base: usize, region: &PropertyRegion) -> Option<usize> {
    let local = Span {
        start: region.from.checked_sub(base)?,
        end: region.to.checked_sub(base)?,
    };
    let text = s.get(local.range())?;
    let idx = text.find(PropertyList::OPEN as char)?;
    Some(region.from + idx)
}
