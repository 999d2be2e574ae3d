//! PostgreSQL implementation of DiagnosisRepository.
//!
//! The full record is stored as JSONB. Type and combination codes are also
//! kept in their own columns for reporting queries.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::diagnosis::DiagnosisRecord;
use crate::domain::foundation::DiagnosisId;
use crate::ports::{DiagnosisRepository, DiagnosisRepositoryError};

const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL implementation of the DiagnosisRepository port.
pub struct PostgresDiagnosisRepository {
    pool: PgPool,
}

impl PostgresDiagnosisRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiagnosisRepository for PostgresDiagnosisRepository {
    async fn save(&self, record: &DiagnosisRecord) -> Result<(), DiagnosisRepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO diagnoses (id, leadership_type, combination_id, record, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.leadership_type.as_str())
        .bind(record.concern_analysis.combination_id.as_str())
        .bind(Json(record))
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                    return DiagnosisRepositoryError::Duplicate(record.id);
                }
            }
            DiagnosisRepositoryError::Storage(format!("Failed to save diagnosis: {}", e))
        })?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &DiagnosisId,
    ) -> Result<Option<DiagnosisRecord>, DiagnosisRepositoryError> {
        let row: Option<(Json<DiagnosisRecord>,)> =
            sqlx::query_as("SELECT record FROM diagnoses WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    // A JSONB payload that no longer matches the record shape
                    // surfaces as a decode error.
                    match e {
                        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                            DiagnosisRepositoryError::Serialization(e.to_string())
                        }
                        _ => DiagnosisRepositoryError::Storage(format!(
                            "Failed to find diagnosis: {}",
                            e
                        )),
                    }
                })?;

        Ok(row.map(|(Json(record),)| record))
    }

    async fn count(&self) -> Result<u64, DiagnosisRepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM diagnoses")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DiagnosisRepositoryError::Storage(format!("Failed to count diagnoses: {}", e))
            })?;

        Ok(count.max(0) as u64)
    }
}
