//! Whole-document parsing tests: snapshots of realistic notes plus the
//! structural invariants every parse must satisfy.

use pretty_assertions::assert_eq;
use xi_rope::Rope;

use crate::parsing::{parse_document, parse_properties, rope::lines_with_spans, snapshot};

const NOTE: &str = "Task one ^t1 [status: todo, owner: sam]\nplain line\n^t2 [x: 1; x: 2] trailing\n";

#[test]
fn snapshot_simple_note() {
    let rope = Rope::from(NOTE);
    let regions = parse_document(&rope);
    snapshot::invariants(NOTE, 0, &regions);

    let snap = snapshot::normalize(&rope, &regions);
    insta::assert_snapshot!(snap.render().trim_end(), @r"
    9..39 ^t1 {status=todo, owner=sam} ^t1 [status: todo, owner: sam]
    51..67 ^t2 {x=1, x=2} ^t2 [x: 1; x: 2]
    ");
}

#[test]
fn snapshot_multiline_list() {
    let text = "^meeting [\n  date: 2024-03-01\n  attendees: ana, bo\n]";
    let rope = Rope::from(text);
    let regions = parse_document(&rope);
    snapshot::invariants(text, 0, &regions);

    let snap = snapshot::normalize(&rope, &regions);
    insta::assert_snapshot!(snap.render().trim_end(), @r"
    0..52 ^meeting {date=2024-03-01, attendees=ana} ^meeting [\n  date: 2024-03-01\n  attendees: ana, bo\n]
    ");
}

/// Parsing each line on its own finds the same single-line regions as one
/// whole-document parse, shifted by the line start.
#[test]
fn per_line_parse_matches_whole_document() {
    let rope = Rope::from(NOTE);
    let whole = parse_document(&rope);

    let per_line: Vec<_> = lines_with_spans(&rope)
        .flat_map(|line| parse_properties(line.span.start, line.content()))
        .collect();

    assert_eq!(per_line, whole);
}

#[test]
fn region_text_reparses_identically() {
    let base = 1000;
    let regions = parse_properties(base, NOTE);
    for r in &regions {
        let own = &NOTE[r.from - base..r.to - base];
        let again = parse_properties(r.from, own);
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].block_id, r.block_id);
        assert_eq!(again[0].properties, r.properties);
    }
}

/// A region cut by the slice end is missed; the enclosing slice finds it.
#[test]
fn region_split_by_slice_boundary_is_missed() {
    let cut = NOTE.find("owner").unwrap();
    assert!(parse_properties(0, &NOTE[..cut]).is_empty());
    assert_eq!(parse_properties(0, NOTE).len(), 2);
}

#[test]
fn empty_document() {
    assert!(parse_document(&Rope::from("")).is_empty());
}
