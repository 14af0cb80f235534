use crate::parsing::{PropertyRegion, parse_properties};

/// Validates parser output invariants for regions parsed from `s` at `base`.
///
/// Asserts that:
/// - Every region lies inside the slice and has `to > from`
/// - Every region carries at least one property
/// - Regions are strictly increasing and never overlap
/// - Re-parsing a region's own text at its `from` reproduces it
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(s: &str, base: usize, regions: &[PropertyRegion]) {
    let end = base + s.len();
    for r in regions {
        assert!(
            base <= r.from && r.from < r.to && r.to <= end,
            "region out of bounds: {:?} (slice {base}..{end})",
            r.span()
        );
        assert!(
            !r.properties.is_empty(),
            "region without properties emitted: {:?}",
            r.span()
        );

        let own = &s[r.from - base..r.to - base];
        let reparsed = parse_properties(r.from, own);
        assert_eq!(
            reparsed.as_slice(),
            std::slice::from_ref(r),
            "region does not re-parse from its own text: {own:?}"
        );
    }
    for w in regions.windows(2) {
        assert!(
            w[0].to <= w[1].from,
            "regions overlap or are out of order: {:?} then {:?}",
            w[0].span(),
            w[1].span()
        );
    }
}
