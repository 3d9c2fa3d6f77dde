//! The immutable evaluation dataset.
//!
//! Records are loaded once from a JSON array and never change afterwards.
//! Loading is lenient: see [`lenient`] for how malformed records are kept.

pub mod lenient;

use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, info_span, warn};

use crate::core::{Error, EvaluationRecord, Result};
pub use lenient::{IssueKind, LoadIssue};

/// Ordered, read-only sequence of evaluation records.
///
/// Cloning is cheap and shares the underlying records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[EvaluationRecord]>,
}

/// Outcome of loading a dataset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub records: usize,
    /// Number of records with at least one issue.
    pub malformed: usize,
    pub issues: Vec<LoadIssue>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Dataset {
    pub fn new(records: Vec<EvaluationRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Load from a JSON file on disk.
    pub fn load(path: &Path) -> Result<(Self, LoadReport)> {
        let _span = info_span!("load_dataset", path = %path.display()).entered();
        let file = File::open(path)
            .map_err(|e| Error::dataset_at(format!("cannot open: {e}"), path))?;
        let (dataset, report) = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            Error::Dataset { message, .. } => Error::dataset_at(message, path),
            other => other,
        })?;
        info!(
            records = report.records,
            malformed = report.malformed,
            "dataset loaded"
        );
        Ok((dataset, report))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<(Self, LoadReport)> {
        let document: Value = serde_json::from_reader(reader)
            .map_err(|e| Error::dataset(format!("invalid JSON: {e}")))?;
        Self::from_value(&document)
    }

    pub fn from_json_str(json: &str) -> Result<(Self, LoadReport)> {
        let document: Value = serde_json::from_str(json)
            .map_err(|e| Error::dataset(format!("invalid JSON: {e}")))?;
        Self::from_value(&document)
    }

    /// Build from an already parsed document, which must be an array.
    pub fn from_value(document: &Value) -> Result<(Self, LoadReport)> {
        let elements = document
            .as_array()
            .ok_or_else(|| Error::dataset("expected a JSON array of evaluation records"))?;

        let mut issues = Vec::new();
        let mut malformed = 0;
        let records: Vec<EvaluationRecord> = elements
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let before = issues.len();
                let record = lenient::record_from_value(index, value, &mut issues);
                if issues.len() > before {
                    malformed += 1;
                }
                record
            })
            .collect();

        for issue in &issues {
            warn!(%issue, "malformed evaluation record");
        }

        let report = LoadReport {
            records: records.len(),
            malformed,
            issues,
        };
        Ok((Self::new(records), report))
    }

    pub fn records(&self) -> &[EvaluationRecord] {
        &self.records
    }
}

impl Deref for Dataset {
    type Target = [EvaluationRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl FromIterator<EvaluationRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = EvaluationRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
