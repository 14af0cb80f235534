use serde::{Deserialize, Serialize};

use super::rope::Span;

/// A single `key: value` pair, in the order it appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    pub key: String,
    pub value: String,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// One recognized occurrence of block property syntax.
///
/// `from` is the offset of the `^` marker and `to` is one past the closing
/// `]`, both in document coordinates. `properties` is never empty and keeps
/// duplicate keys in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRegion {
    pub block_id: String,
    pub properties: Vec<Property>,
    pub from: usize,
    pub to: usize,
}

impl PropertyRegion {
    pub fn span(&self) -> Span {
        Span {
            start: self.from,
            end: self.to,
        }
    }

    /// Pairs rendered as `key: value` and joined with `, `.
    pub fn summary(&self) -> String {
        join_properties(&self.properties)
    }
}

/// Renders pairs as `key: value` joined with `, `.
pub fn join_properties(properties: &[Property]) -> String {
    properties
        .iter()
        .map(Property::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
