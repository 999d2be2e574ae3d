//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `content` - Content readers (embedded reference data, PostgreSQL)
//! - `diagnosis` - Diagnosis repositories (in-memory, PostgreSQL)
//! - `http` - Axum REST API

pub mod content;
pub mod diagnosis;
pub mod http;

pub use content::{PostgresContentReader, StaticContentReader};
pub use diagnosis::{InMemoryDiagnosisRepository, PostgresDiagnosisRepository};
