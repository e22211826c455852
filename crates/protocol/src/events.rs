use serde::{Deserialize, Serialize};

use crate::column_id::ColumnId;
use crate::types::EdgePosition;

/// The two host signals that trigger a re-evaluation.
///
/// Neither carries a payload the tracker uses — both simply mean
/// "re-evaluate now" against the host's current geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Scroll,
    Resize,
}

/// A one-time visibility transition for one column.
///
/// Delivered at most once per (column, position) pair for the lifetime
/// of the tracker that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEvent {
    pub column: ColumnId,
    pub position: EdgePosition,
}

impl VisibilityEvent {
    pub fn new(column: ColumnId, position: EdgePosition) -> Self {
        Self { column, position }
    }

    /// The human-readable log line for this transition. The id is
    /// substituted verbatim and may be empty.
    pub fn message(&self) -> String {
        match self.position {
            EdgePosition::Start => format!(
                "Column with id:{} started to become visible on the page.",
                self.column
            ),
            EdgePosition::Center => format!(
                "Column with id:{} is now more than 50% visible on the page.",
                self.column
            ),
            EdgePosition::End => format!(
                "Column with id:{} is now fully visible on the page.",
                self.column
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_templates_are_literal() {
        let start = VisibilityEvent::new(ColumnId::from("first"), EdgePosition::Start);
        assert_eq!(
            start.message(),
            "Column with id:first started to become visible on the page."
        );

        let center = VisibilityEvent::new(ColumnId::from("first"), EdgePosition::Center);
        assert_eq!(
            center.message(),
            "Column with id:first is now more than 50% visible on the page."
        );

        let end = VisibilityEvent::new(ColumnId::from("first"), EdgePosition::End);
        assert_eq!(
            end.message(),
            "Column with id:first is now fully visible on the page."
        );
    }

    #[test]
    fn empty_id_formats_without_error() {
        let event = VisibilityEvent::new(ColumnId::default(), EdgePosition::Start);
        assert_eq!(
            event.message(),
            "Column with id: started to become visible on the page."
        );
    }

    #[test]
    fn signal_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Signal::Resize).unwrap_or_default();
        assert_eq!(json, "\"resize\"");
        let parsed: Signal = serde_json::from_str("\"scroll\"").unwrap_or(Signal::Resize);
        assert_eq!(parsed, Signal::Scroll);
    }
}
