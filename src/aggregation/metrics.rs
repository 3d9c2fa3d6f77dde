//! Scalar metrics shown in the summary cards.

use serde::Serialize;
use std::collections::HashSet;

use super::facets::distinct_values;
use crate::core::{AsRecord, Facet};

/// Number of distinct `email` values.
pub fn unique_user_count<R: AsRecord>(records: &[R]) -> usize {
    records
        .iter()
        .map(|r| r.record().email.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Mean rating, or `None` for an empty input.
///
/// A poisoned (`NaN`) rating makes the result `NaN`.
pub fn average_rating<R: AsRecord>(records: &[R]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let total: f64 = records.iter().map(|r| r.record().rating).sum();
    Some(total / records.len() as f64)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// One-decimal display form of an average, with a placeholder when undefined.
///
/// Ties round up (`0.25` shows as `0.3`), matching the chart values.
pub fn format_average(average: Option<f64>, placeholder: &str) -> String {
    match average {
        Some(avg) => format!("{:.1}", round_to(avg, 1)),
        None => placeholder.to_string(),
    }
}

/// Values for the three summary cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub unique_users: usize,
    pub average_rating: Option<f64>,
    pub total_concepts: usize,
    pub total_records: usize,
}

impl DashboardMetrics {
    pub fn compute<R: AsRecord>(records: &[R]) -> Self {
        Self {
            unique_users: unique_user_count(records),
            average_rating: average_rating(records),
            total_concepts: distinct_values(records, Facet::Concept).len(),
            total_records: records.len(),
        }
    }

    pub fn average_display(&self, placeholder: &str) -> String {
        format_average(self.average_rating, placeholder)
    }
}
