//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContentReader` - Catalogs and result content
//! - `DiagnosisRepository` - Persistence for completed diagnoses

mod content_reader;
mod diagnosis_repository;

pub use content_reader::{ContentError, ContentReader};
pub use diagnosis_repository::{DiagnosisRepository, DiagnosisRepositoryError};
