use std::fmt::Write as _;

use serde::Serialize;
use xi_rope::Rope;

use crate::parsing::{
    PropertyRegion,
    rope::{slice::preview, span::Span},
};

#[derive(Serialize)]
pub struct Snap {
    pub regions: Vec<RegionSnap>,
}

#[derive(Serialize)]
pub struct RegionSnap {
    pub block_id: String,
    pub span: (usize, usize),
    pub text: String,
    pub properties: Vec<(String, String)>,
}

pub fn normalize(rope: &Rope, regions: &[PropertyRegion]) -> Snap {
    let regions = regions
        .iter()
        .map(|r| RegionSnap {
            block_id: r.block_id.clone(),
            span: (r.from, r.to),
            text: preview(rope, Span::new(r.from, r.to), 60),
            properties: r
                .properties
                .iter()
                .map(|p| (p.key.clone(), p.value.clone()))
                .collect(),
        })
        .collect();

    Snap { regions }
}

impl Snap {
    /// One line per region: `from..to ^id {k=v, ...} <source text>`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for r in &self.regions {
            let pairs = r
                .properties
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "{}..{} ^{} {{{pairs}}} {}",
                r.span.0,
                r.span.1,
                r.block_id,
                r.text.replace('\n', "\\n")
            );
        }
        out
    }
}
