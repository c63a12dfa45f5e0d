use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, TutorialRepository};
use crate::domain::{
    ContentMetrics, ContentSource, Expertise, Tutorial, TutorialId,
};

pub struct PgTutorialRepository {
    pool: PgPool,
}

impl PgTutorialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_tutorial(row: PgRow) -> Result<Tutorial, RepositoryError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
    let expertise: String = row
        .try_get("expertise")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
    let expertise = Expertise::try_from(expertise.as_str())
        .map_err(RepositoryError::CorruptRecord)?;
    let source: String = row
        .try_get("source")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
    let source = if source == "local_fallback" {
        ContentSource::LocalFallback
    } else {
        ContentSource::Provider(source)
    };
    let concepts: serde_json::Value = row
        .try_get("concepts")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
    let packages: serde_json::Value = row
        .try_get("packages")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
    let objectives: serde_json::Value = row
        .try_get("objectives")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
    let duration_minutes: i32 = row
        .try_get("duration_minutes")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
    let word_count: i64 = row
        .try_get("word_count")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
    let char_count: i64 = row
        .try_get("char_count")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
    let difficulty: i16 = row
        .try_get("estimated_difficulty")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
    let reading_minutes: i32 = row
        .try_get("estimated_reading_minutes")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;

    Ok(Tutorial {
        id: TutorialId::from_uuid(id),
        topic: row
            .try_get("topic")
            .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?,
        expertise,
        duration_minutes: duration_minutes as u32,
        content: row
            .try_get("content")
            .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?,
        concepts: serde_json::from_value(concepts)
            .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?,
        packages: serde_json::from_value(packages)
            .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?,
        objectives: serde_json::from_value(objectives)
            .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?,
        topic_category: row
            .try_get("topic_category")
            .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?,
        source,
        metrics: ContentMetrics {
            word_count: word_count as usize,
            char_count: char_count as usize,
            estimated_difficulty: difficulty as u8,
            estimated_reading_minutes: reading_minutes as u32,
        },
        created_at,
    })
}

#[async_trait]
impl TutorialRepository for PgTutorialRepository {
    #[instrument(skip(self, tutorial), fields(tutorial_id = %tutorial.id))]
    async fn save(&self, tutorial: &Tutorial) -> Result<(), RepositoryError> {
        let concepts = serde_json::to_value(&tutorial.concepts)
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let packages = serde_json::to_value(&tutorial.packages)
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let objectives = serde_json::to_value(&tutorial.objectives)
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO tutorials
                (id, topic, expertise, duration_minutes, content, concepts,
                 packages, objectives, topic_category, source, word_count,
                 char_count, estimated_difficulty, estimated_reading_minutes,
                 created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (id) DO UPDATE SET
                content = EXCLUDED.content,
                concepts = EXCLUDED.concepts,
                packages = EXCLUDED.packages,
                objectives = EXCLUDED.objectives,
                source = EXCLUDED.source,
                word_count = EXCLUDED.word_count,
                char_count = EXCLUDED.char_count,
                estimated_difficulty = EXCLUDED.estimated_difficulty,
                estimated_reading_minutes = EXCLUDED.estimated_reading_minutes
            "#,
        )
        .bind(tutorial.id.as_uuid())
        .bind(&tutorial.topic)
        .bind(tutorial.expertise.as_str())
        .bind(tutorial.duration_minutes as i32)
        .bind(&tutorial.content)
        .bind(concepts)
        .bind(packages)
        .bind(objectives)
        .bind(&tutorial.topic_category)
        .bind(tutorial.source.as_str())
        .bind(tutorial.metrics.word_count as i64)
        .bind(tutorial.metrics.char_count as i64)
        .bind(tutorial.metrics.estimated_difficulty as i16)
        .bind(tutorial.metrics.estimated_reading_minutes as i32)
        .bind(tutorial.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(tutorial_id = %id))]
    async fn get(&self, id: TutorialId) -> Result<Option<Tutorial>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, topic, expertise, duration_minutes, content, concepts,
                   packages, objectives, topic_category, source, word_count,
                   char_count, estimated_difficulty, estimated_reading_minutes,
                   created_at
            FROM tutorials
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(row_to_tutorial).transpose()
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: u32) -> Result<Vec<Tutorial>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, topic, expertise, duration_minutes, content, concepts,
                   packages, objectives, topic_category, source, word_count,
                   char_count, estimated_difficulty, estimated_reading_minutes,
                   created_at
            FROM tutorials
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.into_iter().map(row_to_tutorial).collect()
    }
}
