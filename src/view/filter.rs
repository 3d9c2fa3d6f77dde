//! Filter criteria for the evaluations table.

use serde::Serialize;

use crate::core::{EvaluationRecord, Facet};

/// Search text plus optional exact-match facet filters.
///
/// An empty `area` or `concept` string is the same as no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub area: Option<String>,
    pub concept: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = non_empty(area.into());
        self
    }

    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = non_empty(concept.into());
        self
    }

    /// The active exact-match value for a facet, if any.
    pub fn facet(&self, facet: Facet) -> Option<&str> {
        let value = match facet {
            Facet::Area => self.area.as_deref(),
            Facet::Concept => self.concept.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// True when no criterion restricts the records.
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty()
            && self.facet(Facet::Area).is_none()
            && self.facet(Facet::Concept).is_none()
    }

    /// Check if a record passes every criterion.
    pub fn matches(&self, record: &EvaluationRecord) -> bool {
        self.matches_search(record)
            && self.matches_facet(Facet::Area, record)
            && self.matches_facet(Facet::Concept, record)
    }

    fn matches_search(&self, record: &EvaluationRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.email.to_lowercase().contains(&needle)
    }

    fn matches_facet(&self, facet: Facet, record: &EvaluationRecord) -> bool {
        self.facet(facet)
            .map_or(true, |wanted| facet.value_of(record) == wanted)
    }
}

pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Records passing `criteria`, in their original relative order.
pub fn filter<'a>(records: &'a [EvaluationRecord], criteria: &FilterCriteria) -> Vec<&'a EvaluationRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::test_support::record;

    fn fixture() -> Vec<EvaluationRecord> {
        vec![
            record("jorge@x.com", "Jorge Ruiz", "Network", "Phishing", 1.0),
            record("ana@x.com", "Ana Joya", "Cloud", "Phishing", 0.0),
            record("luis@corp.io", "Luis", "Network", "Malware", 1.0),
            record("JOSE@x.com", "Pepe", "network", "Malware", 0.0),
        ]
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let records = fixture();
        let result: Vec<_> = filter(&records, &FilterCriteria::new()).into_iter().cloned().collect();
        assert_eq!(result, records);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_email() {
        let records = fixture();
        let criteria = FilterCriteria::new().with_search("JO");
        let names: Vec<_> = filter(&records, &criteria).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Jorge Ruiz", "Ana Joya", "Pepe"]);
    }

    #[test]
    fn test_search_matches_email_substring() {
        let records = fixture();
        let criteria = FilterCriteria::new().with_search("corp.io");
        assert_eq!(filter(&records, &criteria).len(), 1);
    }

    #[test]
    fn test_area_is_exact_and_case_sensitive() {
        let records = fixture();
        let criteria = FilterCriteria::new().with_area("Network");
        let emails: Vec<_> = filter(&records, &criteria).iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, vec!["jorge@x.com", "luis@corp.io"]);
    }

    #[test]
    fn test_all_criteria_must_hold() {
        let records = fixture();
        let criteria = FilterCriteria::new()
            .with_search("jo")
            .with_area("Network")
            .with_concept("Phishing");
        let result = filter(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].email, "jorge@x.com");
    }

    #[test]
    fn test_empty_facet_string_is_unset() {
        let criteria = FilterCriteria::new().with_area("").with_concept("");
        assert!(criteria.is_empty());
        assert_eq!(criteria.area, None);

        let raw = FilterCriteria {
            area: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert!(raw.is_empty());
        assert_eq!(filter(&fixture(), &raw).len(), 4);
    }

    #[test]
    fn test_no_matches() {
        let criteria = FilterCriteria::new().with_concept("Firewalls");
        assert!(filter(&fixture(), &criteria).is_empty());
    }
}
