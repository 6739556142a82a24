//! Queries against the `schools` table.
//!
//! All functions are async, borrow the `SqlitePool`, and return `AppError`
//! on failure.

use crate::error::AppError;
use crate::models::{NewSchool, School};
use sqlx::SqlitePool;

/// The schools table schema. Shared with the startup migration so the
/// `/api/init-db` endpoint and `sqlx::migrate!` can never drift apart.
const SCHEMA_SQL: &str = include_str!("../../migrations/0001_schools.sql");

/// Creates the `schools` table if it does not exist yet.
///
/// Startup migrations normally handle this; the endpoint that calls it exists
/// for re-initialising a wiped database file without a restart.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    Ok(())
}

/// Inserts a validated school record and returns the stored row.
pub async fn insert_school(pool: &SqlitePool, school: &NewSchool) -> Result<School, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO schools (name, address, city, state, contact, image, email_id)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&school.name)
    .bind(&school.address)
    .bind(&school.city)
    .bind(&school.state)
    .bind(&school.contact)
    .bind(&school.image)
    .bind(&school.email_id)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    let row = sqlx::query_as::<_, School>(
        r#"
        SELECT id, name, address, city, state, contact, image, email_id, created_at
        FROM schools
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Lists every school, newest registration first.
pub async fn list_schools(pool: &SqlitePool) -> Result<Vec<School>, AppError> {
    let schools = sqlx::query_as::<_, School>(
        r#"
        SELECT id, name, address, city, state, contact, image, email_id, created_at
        FROM schools
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(schools)
}
