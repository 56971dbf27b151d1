//! The read side: five independent fetches plus the id paginator.
//!
//! No transaction wraps these — reads reflect whatever storage holds at the
//! moment each statement runs.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::talent::{
    AddressRow, SkillRow, TalentResumeRow, TalentRow, WorkHistoryRow,
};

pub async fn fetch_talent(pool: &PgPool, id: i32) -> Result<Option<TalentRow>, AppError> {
    let row = sqlx::query_as::<_, TalentRow>("SELECT * FROM talents WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn fetch_addresses(pool: &PgPool, talent_id: i32) -> Result<Vec<AddressRow>, AppError> {
    let rows =
        sqlx::query_as::<_, AddressRow>("SELECT * FROM addresses WHERE talent_id = $1 ORDER BY id")
            .bind(talent_id)
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

pub async fn fetch_skills(pool: &PgPool, talent_id: i32) -> Result<Vec<SkillRow>, AppError> {
    let rows =
        sqlx::query_as::<_, SkillRow>("SELECT * FROM skills WHERE talent_id = $1 ORDER BY id")
            .bind(talent_id)
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

pub async fn fetch_work_history(
    pool: &PgPool,
    talent_id: i32,
) -> Result<Vec<WorkHistoryRow>, AppError> {
    let rows = sqlx::query_as::<_, WorkHistoryRow>(
        "SELECT * FROM work_history WHERE talent_id = $1 ORDER BY from_date DESC",
    )
    .bind(talent_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// The most recently created resume; storage may hold history behind it.
pub async fn fetch_latest_resume(
    pool: &PgPool,
    talent_id: i32,
) -> Result<Option<TalentResumeRow>, AppError> {
    let row = sqlx::query_as::<_, TalentResumeRow>(
        "SELECT * FROM talent_resumes WHERE talent_id = $1 ORDER BY created_date DESC LIMIT 1",
    )
    .bind(talent_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Ordered ascending id slice for offset pagination. An offset past the end of
/// the table yields an empty list, not an error.
pub async fn list_talent_ids(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<i32>, AppError> {
    let ids = sqlx::query_scalar::<_, i32>(
        "SELECT id FROM talents ORDER BY id LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}
