//! Distinct facet values used to populate filter options.

use serde::Serialize;
use std::collections::HashSet;

use crate::core::{AsRecord, Facet};

/// Unique values of `facet`, in first-occurrence order.
pub fn distinct_values<R: AsRecord>(records: &[R], facet: Facet) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| facet.value_of(r.record()))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Option lists for the area and concept selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub areas: Vec<String>,
    pub concepts: Vec<String>,
}

impl FacetOptions {
    pub fn from_records<R: AsRecord>(records: &[R]) -> Self {
        Self {
            areas: distinct_values(records, Facet::Area),
            concepts: distinct_values(records, Facet::Concept),
        }
    }
}
