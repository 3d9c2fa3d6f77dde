pub mod errors;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use types::{AsRecord, EvaluationRecord, Facet, Gender};
