//! Change requests reported back by a renderer.

use serde::Serialize;

/// A user interaction that changes the view-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum ViewEvent {
    SearchChanged(String),
    /// Empty string selects every area.
    AreaChanged(String),
    /// Empty string selects every concept.
    ConceptChanged(String),
    /// Raw rows-per-page value; rejected unless it is 5, 10 or 20.
    PageSizeChanged(usize),
    PageChanged(usize),
    PreviousPage,
    NextPage,
}

impl ViewEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ViewEvent::SearchChanged(_) => "search_changed",
            ViewEvent::AreaChanged(_) => "area_changed",
            ViewEvent::ConceptChanged(_) => "concept_changed",
            ViewEvent::PageSizeChanged(_) => "page_size_changed",
            ViewEvent::PageChanged(_) => "page_changed",
            ViewEvent::PreviousPage => "previous_page",
            ViewEvent::NextPage => "next_page",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(ViewEvent::SearchChanged("jo".into()).name(), "search_changed");
        assert_eq!(ViewEvent::PreviousPage.name(), "previous_page");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ViewEvent::PageSizeChanged(5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"event": "page_size_changed", "value": 5})
        );
    }
}
