use async_trait::async_trait;
use sqlx::PgPool;

use super::{ContactStore, CounterStore, StoreError};
use crate::models::analytics::{CounterField, ResumeStats, ResumeStatsRow};
use crate::models::contact::ContactMessageRow;

/// Postgres-backed store. Increments are single upserts, so the database
/// serializes concurrent writers on the subject row.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn increment_sql(field: CounterField) -> &'static str {
    match field {
        CounterField::Views => {
            r#"
            INSERT INTO resume_stats (subject, views, downloads)
            VALUES ($1, 1, 0)
            ON CONFLICT (subject) DO UPDATE
                SET views = resume_stats.views + 1, updated_at = now()
            "#
        }
        CounterField::Downloads => {
            r#"
            INSERT INTO resume_stats (subject, views, downloads)
            VALUES ($1, 0, 1)
            ON CONFLICT (subject) DO UPDATE
                SET downloads = resume_stats.downloads + 1, updated_at = now()
            "#
        }
    }
}

#[async_trait]
impl CounterStore for PgStore {
    async fn increment(&self, subject: &str, field: CounterField) -> Result<(), StoreError> {
        sqlx::query(increment_sql(field))
            .bind(subject)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn read(&self, subject: &str) -> Result<ResumeStats, StoreError> {
        let row: Option<ResumeStatsRow> =
            sqlx::query_as("SELECT * FROM resume_stats WHERE subject = $1")
                .bind(subject)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(ResumeStats::from).unwrap_or_default())
    }
}

#[async_trait]
impl ContactStore for PgStore {
    async fn insert(&self, message: &ContactMessageRow) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages
                (id, name, email, subject, message, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(&message.status)
        .bind(message.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<ContactMessageRow>, StoreError> {
        Ok(sqlx::query_as::<_, ContactMessageRow>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC LIMIT $1",
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?)
    }
}
