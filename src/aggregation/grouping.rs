//! Category-keyed aggregates behind the two charts.
//!
//! Both groupings are built in a single pass and keep categories in the order
//! they first appear in the input. Only categories present in the input get
//! an entry; names are compared exactly, so `"Network"` and `"network"` are
//! separate categories.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::metrics::round_to;
use crate::core::AsRecord;

/// One bar of the concept chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptAverage {
    pub name: String,
    /// Mean rating rounded to two decimals.
    pub avg_rating: f64,
}

/// One slice of the area chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaUsers {
    pub name: String,
    pub users: usize,
}

/// Mapping concept -> average rating.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConceptAverages(Vec<ConceptAverage>);

/// Mapping area -> distinct user count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AreaUserCounts(Vec<AreaUsers>);

#[derive(Default)]
struct RatingTotals {
    total: f64,
    count: usize,
}

/// Average rating per concept, rounded to two decimals.
pub fn average_rating_by_concept<R: AsRecord>(records: &[R]) -> ConceptAverages {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, RatingTotals> = HashMap::new();

    for record in records.iter().map(AsRecord::record) {
        let entry = totals.entry(record.concept.as_str()).or_insert_with(|| {
            order.push(record.concept.as_str());
            RatingTotals::default()
        });
        entry.total += record.rating;
        entry.count += 1;
    }

    ConceptAverages(
        order
            .into_iter()
            .map(|name| {
                let stats = &totals[name];
                ConceptAverage {
                    name: name.to_string(),
                    avg_rating: round_to(stats.total / stats.count as f64, 2),
                }
            })
            .collect(),
    )
}

/// Distinct emails per area.
pub fn unique_user_count_by_area<R: AsRecord>(records: &[R]) -> AreaUserCounts {
    let mut order: Vec<&str> = Vec::new();
    let mut users: HashMap<&str, HashSet<&str>> = HashMap::new();

    for record in records.iter().map(AsRecord::record) {
        users
            .entry(record.area.as_str())
            .or_insert_with(|| {
                order.push(record.area.as_str());
                HashSet::new()
            })
            .insert(record.email.as_str());
    }

    AreaUserCounts(
        order
            .into_iter()
            .map(|name| AreaUsers {
                name: name.to_string(),
                users: users[name].len(),
            })
            .collect(),
    )
}

impl ConceptAverages {
    pub fn get(&self, concept: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.name == concept)
            .map(|entry| entry.avg_rating)
    }

    pub fn entries(&self) -> &[ConceptAverage] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AreaUserCounts {
    pub fn get(&self, area: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|entry| entry.name == area)
            .map(|entry| entry.users)
    }

    pub fn entries(&self) -> &[AreaUsers] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
