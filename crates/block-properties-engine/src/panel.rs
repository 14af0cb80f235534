//! Whole-file listing of block properties for a side panel.
//!
//! The panel re-parses a file line by line, independently of any editor
//! overlay, and summarizes which keys are in use. Navigation is left to the
//! host: a block only reports the caret position to jump to.

use serde::Serialize;
use xi_rope::Rope;

use crate::parsing::{
    Property, parse_properties,
    rope::{lines_with_spans, truncate_chars},
};

/// Maximum number of characters of leading line text kept as context.
pub const CONTEXT_CHARS: usize = 40;

const START_OF_LINE: &str = "(start of line)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelBlock {
    pub block_id: String,
    pub properties: Vec<Property>,
    /// Zero-based line number.
    pub line: usize,
    /// Text before the marker on the same line, trimmed and shortened.
    pub context: String,
}

/// Where the host should place the caret when a block is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaretTarget {
    pub line: usize,
    pub character: usize,
}

impl PanelBlock {
    pub fn caret_target(&self) -> CaretTarget {
        CaretTarget {
            line: self.line,
            character: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCount {
    pub key: String,
    pub count: usize,
}

/// Lists every region in `text`, one line at a time.
pub fn extract_blocks(text: &str) -> Vec<PanelBlock> {
    let rope = Rope::from(text);
    let mut blocks = vec![];

    for line in lines_with_spans(&rope) {
        let content = line.content();
        for region in parse_properties(0, content) {
            let before = content[..region.from].trim();
            let context = truncate_chars(before, CONTEXT_CHARS);
            blocks.push(PanelBlock {
                block_id: region.block_id,
                properties: region.properties,
                line: line.number,
                context: if context.is_empty() {
                    START_OF_LINE.to_string()
                } else {
                    context.to_string()
                },
            });
        }
    }

    blocks
}

/// How often each key is used, in order of first appearance.
pub fn count_keys(blocks: &[PanelBlock]) -> Vec<KeyCount> {
    let mut counts: Vec<KeyCount> = vec![];
    for p in blocks.iter().flat_map(|b| &b.properties) {
        match counts.iter_mut().find(|c| c.key == p.key) {
            Some(c) => c.count += 1,
            None => counts.push(KeyCount {
                key: p.key.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// What the panel shows for the active file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PanelContent {
    NoFile,
    Empty {
        title: String,
    },
    Blocks {
        title: String,
        count_label: String,
        blocks: Vec<PanelBlock>,
        summary: Vec<KeyCount>,
    },
}

impl PanelContent {
    /// Builds the panel for `file`, given as `(title, text)`.
    pub fn for_file(file: Option<(&str, &str)>) -> Self {
        let Some((title, text)) = file else {
            return PanelContent::NoFile;
        };

        let blocks = extract_blocks(text);
        if blocks.is_empty() {
            return PanelContent::Empty {
                title: title.to_string(),
            };
        }

        log::debug!("panel: {} block(s) in {title}", blocks.len());
        PanelContent::Blocks {
            title: title.to_string(),
            count_label: format!("{} block(s) with properties", blocks.len()),
            summary: count_keys(&blocks),
            blocks,
        }
    }
}
