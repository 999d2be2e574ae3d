//! PostgreSQL implementation of ContentReader.
//!
//! Content lives in four tables (`questions`, `concerns`, `leadership_types`,
//! `solutions`). Catalogs are rebuilt and validated on each read so edits to
//! the tables take effect without a restart.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::concern::{CombinationId, Concern, ConcernCatalog, ConcernCategory};
use crate::domain::content::{ActionItem, ReferenceContent, Solution};
use crate::domain::foundation::{ConcernId, QuestionId};
use crate::domain::leadership::{LeadershipTypeCode, LeadershipTypeProfile};
use crate::domain::questionnaire::{Dimension, Question, QuestionCatalog};
use crate::ports::{ContentError, ContentReader};

/// PostgreSQL implementation of the ContentReader port.
pub struct PostgresContentReader {
    pool: PgPool,
}

impl PostgresContentReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads `content` into whichever content tables are empty.
    ///
    /// Tables that already hold rows are left alone. Returns whether any rows
    /// were written.
    pub async fn seed_if_empty(&self, content: &ReferenceContent) -> Result<bool, ContentError> {
        let counts: (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM questions),
                (SELECT COUNT(*) FROM concerns),
                (SELECT COUNT(*) FROM leadership_types),
                (SELECT COUNT(*) FROM solutions)
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(unavailable)?;

        let plan = SeedPlan::from_counts(counts);
        if plan.is_empty() {
            return Ok(false);
        }

        let mut tx = self.pool.begin().await.map_err(unavailable)?;

        if plan.questions {
            for (position, question) in content.questions.questions().iter().enumerate() {
                sqlx::query(
                    r#"
                    INSERT INTO questions (id, text, dimension, subdimension, position)
                    VALUES ($1, $2, $3, $4, $5)
                    "#,
                )
                .bind(question.id.value() as i32)
                .bind(&question.text)
                .bind(question.dimension.as_str())
                .bind(&question.subdimension)
                .bind(position as i32)
                .execute(&mut *tx)
                .await
                .map_err(unavailable)?;
            }
        }

        if plan.concerns {
            for (position, concern) in content.concerns.concerns().iter().enumerate() {
                let categories: Vec<String> =
                    concern.categories.iter().map(|c| c.as_str().to_string()).collect();
                sqlx::query(
                    r#"
                    INSERT INTO concerns (id, label, categories, group_name, position)
                    VALUES ($1, $2, $3, $4, $5)
                    "#,
                )
                .bind(concern.id.as_str())
                .bind(&concern.label)
                .bind(categories)
                .bind(&concern.group_name)
                .bind(position as i32)
                .execute(&mut *tx)
                .await
                .map_err(unavailable)?;
            }
        }

        if plan.leadership_types {
            for profile in content.leadership_types.values() {
                sqlx::query(
                    r#"
                    INSERT INTO leadership_types
                        (code, name, title, description, strengths, growth_areas, image)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    "#,
                )
                .bind(profile.code.as_str())
                .bind(&profile.name)
                .bind(&profile.title)
                .bind(&profile.description)
                .bind(&profile.strengths)
                .bind(&profile.growth_areas)
                .bind(&profile.image)
                .execute(&mut *tx)
                .await
                .map_err(unavailable)?;
            }
        }

        if plan.solutions {
            for solution in content.solutions.values() {
                sqlx::query(
                    r#"
                    INSERT INTO solutions (id, title, core_issue, field_voices, diagnosis, actions)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    "#,
                )
                .bind(solution.id.as_str())
                .bind(&solution.title)
                .bind(&solution.core_issue)
                .bind(&solution.field_voices)
                .bind(&solution.diagnosis)
                .bind(Json(&solution.actions))
                .execute(&mut *tx)
                .await
                .map_err(unavailable)?;
            }
        }

        tx.commit().await.map_err(unavailable)?;
        tracing::info!(
            questions = plan.questions,
            concerns = plan.concerns,
            leadership_types = plan.leadership_types,
            solutions = plan.solutions,
            "Seeded empty content tables"
        );
        Ok(true)
    }
}

/// Which content tables need seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SeedPlan {
    questions: bool,
    concerns: bool,
    leadership_types: bool,
    solutions: bool,
}

impl SeedPlan {
    /// Row counts in table order: questions, concerns, leadership types, solutions.
    fn from_counts((questions, concerns, leadership_types, solutions): (i64, i64, i64, i64)) -> Self {
        Self {
            questions: questions == 0,
            concerns: concerns == 0,
            leadership_types: leadership_types == 0,
            solutions: solutions == 0,
        }
    }

    fn is_empty(&self) -> bool {
        !(self.questions || self.concerns || self.leadership_types || self.solutions)
    }
}

fn unavailable(e: sqlx::Error) -> ContentError {
    ContentError::Unavailable(e.to_string())
}

#[derive(Debug, sqlx::FromRow)]
struct QuestionRow {
    id: i32,
    text: String,
    dimension: String,
    subdimension: Option<String>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = ContentError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        let id = u32::try_from(row.id)
            .map_err(|_| ContentError::Malformed(format!("negative question id {}", row.id)))?;
        Ok(Question {
            id: QuestionId::new(id),
            text: row.text,
            dimension: row.dimension.parse::<Dimension>()?,
            subdimension: row.subdimension,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ConcernRow {
    id: String,
    label: String,
    categories: Vec<String>,
    group_name: String,
}

impl TryFrom<ConcernRow> for Concern {
    type Error = ContentError;

    fn try_from(row: ConcernRow) -> Result<Self, Self::Error> {
        let categories = row
            .categories
            .iter()
            .map(|c| c.parse::<ConcernCategory>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Concern {
            id: ConcernId::new(row.id)?,
            label: row.label,
            categories,
            group_name: row.group_name,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LeadershipTypeRow {
    code: String,
    name: String,
    title: String,
    description: String,
    strengths: Vec<String>,
    growth_areas: Vec<String>,
    image: Option<String>,
}

impl TryFrom<LeadershipTypeRow> for LeadershipTypeProfile {
    type Error = ContentError;

    fn try_from(row: LeadershipTypeRow) -> Result<Self, Self::Error> {
        Ok(LeadershipTypeProfile {
            code: row.code.parse::<LeadershipTypeCode>()?,
            name: row.name,
            title: row.title,
            description: row.description,
            strengths: row.strengths,
            growth_areas: row.growth_areas,
            image: row.image,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SolutionRow {
    id: String,
    title: String,
    core_issue: String,
    field_voices: Vec<String>,
    diagnosis: String,
    actions: Json<Vec<ActionItem>>,
}

impl TryFrom<SolutionRow> for Solution {
    type Error = ContentError;

    fn try_from(row: SolutionRow) -> Result<Self, Self::Error> {
        Ok(Solution {
            id: row.id.parse::<CombinationId>()?,
            title: row.title,
            core_issue: row.core_issue,
            field_voices: row.field_voices,
            diagnosis: row.diagnosis,
            actions: row.actions.0,
        })
    }
}

#[async_trait]
impl ContentReader for PostgresContentReader {
    async fn question_catalog(&self) -> Result<Arc<QuestionCatalog>, ContentError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, text, dimension, subdimension
            FROM questions
            ORDER BY position, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)?;

        let questions = rows
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Arc::new(QuestionCatalog::new(questions)?))
    }

    async fn concern_catalog(&self) -> Result<Arc<ConcernCatalog>, ContentError> {
        let rows: Vec<ConcernRow> = sqlx::query_as(
            r#"
            SELECT id, label, categories, group_name
            FROM concerns
            ORDER BY position, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unavailable)?;

        let concerns = rows
            .into_iter()
            .map(Concern::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Arc::new(ConcernCatalog::new(concerns)?))
    }

    async fn leadership_type(
        &self,
        code: LeadershipTypeCode,
    ) -> Result<Option<LeadershipTypeProfile>, ContentError> {
        let row: Option<LeadershipTypeRow> = sqlx::query_as(
            r#"
            SELECT code, name, title, description, strengths, growth_areas, image
            FROM leadership_types
            WHERE code = $1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)?;

        row.map(LeadershipTypeProfile::try_from).transpose()
    }

    async fn solution(&self, combination: CombinationId) -> Result<Option<Solution>, ContentError> {
        let row: Option<SolutionRow> = sqlx::query_as(
            r#"
            SELECT id, title, core_issue, field_voices, diagnosis, actions
            FROM solutions
            WHERE id = $1
            "#,
        )
        .bind(combination.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)?;

        row.map(Solution::try_from).transpose()
    }
}
