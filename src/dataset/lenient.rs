//! Field-by-field conversion of loosely typed JSON into records.
//!
//! Nothing here rejects a record. A missing or mistyped field is replaced by
//! a poisoned placeholder (`""`, `0`, `NaN`) and reported as a [`LoadIssue`].

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::core::{EvaluationRecord, Gender};

/// What went wrong with one field of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadIssue {
    /// Position of the record in the source array.
    pub index: usize,
    pub field: &'static str,
    pub problem: IssueKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Missing,
    WrongType,
    /// The element itself is not a JSON object.
    NotAnObject,
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let problem = match self.problem {
            IssueKind::Missing => "missing",
            IssueKind::WrongType => "wrong type",
            IssueKind::NotAnObject => "not an object",
        };
        write!(f, "record {}: {} {}", self.index, self.field, problem)
    }
}

/// Convert one array element into a record, collecting issues.
pub fn record_from_value(index: usize, value: &Value, issues: &mut Vec<LoadIssue>) -> EvaluationRecord {
    let empty = Map::new();
    let object = match value.as_object() {
        Some(object) => object,
        None => {
            issues.push(LoadIssue {
                index,
                field: "record",
                problem: IssueKind::NotAnObject,
            });
            &empty
        }
    };
    let mut fields = FieldReader {
        index,
        object,
        issues,
        report_missing: value.is_object(),
    };

    EvaluationRecord {
        email: fields.string("email"),
        name: fields.string("name"),
        age: fields.age(),
        gender: fields.gender(),
        area: fields.string("area"),
        concept: fields.string("concept"),
        rating: fields.rating(),
    }
}

struct FieldReader<'a> {
    index: usize,
    object: &'a Map<String, Value>,
    issues: &'a mut Vec<LoadIssue>,
    report_missing: bool,
}

impl<'a> FieldReader<'a> {
    fn lookup(&mut self, field: &'static str) -> Option<&'a Value> {
        let object: &'a Map<String, Value> = self.object;
        match object.get(field) {
            Some(Value::Null) | None => {
                if self.report_missing {
                    self.issues.push(LoadIssue {
                        index: self.index,
                        field,
                        problem: IssueKind::Missing,
                    });
                }
                None
            }
            Some(value) => Some(value),
        }
    }

    fn wrong_type(&mut self, field: &'static str) {
        self.issues.push(LoadIssue {
            index: self.index,
            field,
            problem: IssueKind::WrongType,
        });
    }

    fn string(&mut self, field: &'static str) -> String {
        match self.lookup(field).map(Value::as_str) {
            Some(Some(s)) => s.to_string(),
            Some(None) => {
                self.wrong_type(field);
                String::new()
            }
            None => String::new(),
        }
    }

    fn age(&mut self) -> u32 {
        match self.lookup("age").map(whole_number) {
            Some(Some(age)) => u32::try_from(age).unwrap_or(u32::MAX),
            Some(None) => {
                self.wrong_type("age");
                0
            }
            None => 0,
        }
    }

    fn gender(&mut self) -> Gender {
        match self.lookup("gender").map(Value::as_str) {
            Some(Some(code)) => Gender::from_code(code),
            Some(None) => {
                self.wrong_type("gender");
                Gender::Unknown
            }
            None => Gender::Unknown,
        }
    }

    fn rating(&mut self) -> f64 {
        match self.lookup("rating").map(Value::as_f64) {
            Some(Some(rating)) => rating,
            Some(None) => {
                self.wrong_type("rating");
                f64::NAN
            }
            None => f64::NAN,
        }
    }
}

/// Non-negative integer, also accepting integral floats such as `30.0`.
fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}
