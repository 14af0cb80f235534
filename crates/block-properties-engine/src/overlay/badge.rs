use serde::Serialize;

use crate::parsing::{Property, join_properties};

/// Compact marker that replaces a property list in badge mode.
///
/// Two badges are equal only if the block id and the whole property list
/// match, so any edit to a pair forces the host to re-render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeWidget {
    pub block_id: String,
    pub properties: Vec<Property>,
}

/// Host-facing presentation of a badge.
///
/// Carries everything a UI layer needs to draw the marker: the visible
/// glyph (property count), the structured data and an accessible label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeRecord {
    pub class: &'static str,
    pub block_id: String,
    /// JSON array of `{"key": .., "value": ..}` objects.
    pub data_properties: String,
    pub text: String,
    pub title: String,
}

impl BadgeWidget {
    pub const CLASS: &'static str = "block-property-badge";

    pub fn new(block_id: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            block_id: block_id.into(),
            properties,
        }
    }

    pub fn count(&self) -> usize {
        self.properties.len()
    }

    /// Accessible hover label: every pair as `key: value`, comma-joined.
    pub fn title(&self) -> String {
        join_properties(&self.properties)
    }

    pub fn to_record(&self) -> serde_json::Result<BadgeRecord> {
        Ok(BadgeRecord {
            class: Self::CLASS,
            block_id: self.block_id.clone(),
            data_properties: serde_json::to_string(&self.properties)?,
            text: self.count().to_string(),
            title: self.title(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn widget() -> BadgeWidget {
        BadgeWidget::new(
            "t1",
            vec![Property::new("status", "todo"), Property::new("owner", "sam")],
        )
    }

    #[test]
    fn record_carries_count_data_and_label() {
        let record = widget().to_record().unwrap();
        assert_eq!(
            record,
            BadgeRecord {
                class: "block-property-badge",
                block_id: "t1".into(),
                data_properties:
                    r#"[{"key":"status","value":"todo"},{"key":"owner","value":"sam"}]"#.into(),
                text: "2".into(),
                title: "status: todo, owner: sam".into(),
            }
        );
    }

    #[test]
    fn equality_needs_identical_property_list() {
        let a = widget();
        assert_eq!(a, widget());

        let mut reordered = widget();
        reordered.properties.reverse();
        assert_ne!(a, reordered);

        let mut renamed = widget();
        renamed.block_id = "t2".into();
        assert_ne!(a, renamed);
    }
}
