use serde::{Serialize, Serializer};
use std::fmt;

/// One cybersecurity competency evaluation.
///
/// A user (identified by `email`) usually has several records, one per
/// evaluated concept. `(email, concept)` is the display key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    pub email: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub area: String,
    pub concept: String,
    /// Pass/fail signal, observed as 0 or 1. `NaN` when the source value was
    /// missing or not a number.
    pub rating: f64,
}

impl EvaluationRecord {
    /// Key used to identify a row in the table.
    pub fn display_key(&self) -> String {
        format!("{}-{}", self.email, self.concept)
    }

    /// Whether the rating counts as a pass for the table indicator.
    pub fn is_passing(&self) -> bool {
        self.rating != 0.0
    }
}

/// Read access to a record, implemented for records and references to them
/// so aggregations accept both the dataset and a filtered subset.
pub trait AsRecord {
    fn record(&self) -> &EvaluationRecord;
}

impl AsRecord for EvaluationRecord {
    fn record(&self) -> &EvaluationRecord {
        self
    }
}

impl<T: AsRecord + ?Sized> AsRecord for &T {
    fn record(&self) -> &EvaluationRecord {
        (**self).record()
    }
}

/// Gender code as stored in the dataset.
///
/// Serializes back to the raw code, so an unexpected code such as `"X"`
/// survives a JSON round trip even though it displays like `"F"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Code `"M"`.
    Male,
    /// Code `"F"`.
    Female,
    /// Any other string code, kept verbatim.
    Other(String),
    /// The field was missing or not a string.
    Unknown,
}

impl Gender {
    pub fn from_code(code: &str) -> Self {
        match code {
            "M" => Gender::Male,
            "F" => Gender::Female,
            other => Gender::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other(code) => code,
            Gender::Unknown => "",
        }
    }

    /// Label shown in the table. Only `"M"` is told apart from the rest.
    pub fn display_label(&self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female | Gender::Other(_) | Gender::Unknown => "Femenino",
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}

/// Categorical fields used for filtering and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Area,
    Concept,
}

impl Facet {
    /// Borrow the value of this facet from a record.
    pub fn value_of<'a>(&self, record: &'a EvaluationRecord) -> &'a str {
        match self {
            Facet::Area => &record.area,
            Facet::Concept => &record.concept,
        }
    }
}
