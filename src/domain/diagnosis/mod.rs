//! Diagnosis module - a completed self-assessment and its derived results.

mod record;

pub use record::{DiagnosisRecord, MAX_RESPONDENT_NAME_LEN};
