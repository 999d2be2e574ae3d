//! Diagnosis persistence adapters.
//!
//! - **InMemoryDiagnosisRepository** - Process-local storage (development, tests)
//! - **PostgresDiagnosisRepository** - JSONB-backed storage

mod in_memory;
mod postgres;

pub use in_memory::InMemoryDiagnosisRepository;
pub use postgres::PostgresDiagnosisRepository;
