//! Professor persistence: the `ProfessorStore` seam and its PostgreSQL implementation.

use crate::model::Professor;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("professor with id {0} not found")]
    NotFound(i32),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Data access for professor records. Shared across requests as `Arc<dyn ProfessorStore>`.
#[async_trait]
pub trait ProfessorStore: Send + Sync {
    /// Create the backing table if absent. Safe to call on every start.
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Every row, in no particular order.
    async fn list_all(&self) -> Result<Vec<Professor>, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Professor, StoreError>;

    /// Insert using the record's fields and timestamps; `professor.id` is ignored.
    /// Returns the id assigned by the backend.
    async fn create(&self, professor: &Professor) -> Result<i32, StoreError>;

    /// Overwrite every mutable field of row `id`. `None` when no row matched.
    async fn update(&self, id: i32, professor: &Professor) -> Result<Option<Professor>, StoreError>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete(&self, id: i32) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS professor (
        id SERIAL PRIMARY KEY,
        first_name VARCHAR(255) NOT NULL,
        last_name VARCHAR(255) NOT NULL,
        second_last_name VARCHAR(255) NOT NULL,
        age INT NOT NULL,
        degree VARCHAR(255) NOT NULL,
        created_at TIMESTAMP,
        updated_at TIMESTAMP
    )
"#;

const COLUMNS: &str = "id, first_name, last_name, second_last_name, age, degree, created_at, updated_at";

/// Timestamps are written as UTC wall-clock `TIMESTAMP` values; reads also accept `TIMESTAMPTZ` columns.
impl<'r> FromRow<'r, PgRow> for Professor {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Professor {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            second_last_name: row.try_get("second_last_name")?,
            age: row.try_get("age")?,
            degree: row.try_get("degree")?,
            created_at: utc_column(row, "created_at")?,
            updated_at: utc_column(row, "updated_at")?,
        })
    }
}

fn utc_column(row: &PgRow, name: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    if let Ok(v) = row.try_get::<DateTime<Utc>, _>(name) {
        return Ok(v);
    }
    row.try_get::<NaiveDateTime, _>(name).map(|naive| naive.and_utc())
}

/// `ProfessorStore` over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgProfessorStore {
    pool: PgPool,
}

impl PgProfessorStore {
    pub fn new(pool: PgPool) -> Self {
        PgProfessorStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProfessorStore for PgProfessorStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Professor>, StoreError> {
        let sql = format!("SELECT {} FROM professor", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Professor>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Professor, StoreError> {
        let sql = format!("SELECT {} FROM professor WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Professor>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, professor: &Professor) -> Result<i32, StoreError> {
        let sql = r#"
            INSERT INTO professor (first_name, last_name, second_last_name, age, degree, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
        "#;
        tracing::debug!(sql = %sql, professor = ?professor, "query");
        let id: i32 = sqlx::query_scalar(sql)
            .bind(&professor.first_name)
            .bind(&professor.last_name)
            .bind(&professor.second_last_name)
            .bind(professor.age)
            .bind(&professor.degree)
            .bind(professor.created_at.naive_utc())
            .bind(professor.updated_at.naive_utc())
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, id: i32, professor: &Professor) -> Result<Option<Professor>, StoreError> {
        let sql = format!(
            r#"
            UPDATE professor
            SET first_name = $1, last_name = $2, second_last_name = $3, age = $4, degree = $5, updated_at = $6
            WHERE id = $7
            RETURNING {}
            "#,
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, professor = ?professor, "query");
        let row = sqlx::query_as::<_, Professor>(&sql)
            .bind(&professor.first_name)
            .bind(&professor.last_name)
            .bind(&professor.second_last_name)
            .bind(professor.age)
            .bind(&professor.degree)
            .bind(professor.updated_at.naive_utc())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let sql = "DELETE FROM professor WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
