use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::talent::projection::{project_talent, TalentProjection};
use crate::talent::queries;

#[derive(Debug, Deserialize)]
pub struct TalentQuery {
    #[serde(rename = "includeResume")]
    pub include_resume: Option<String>,
}

/// GET /front-office/v1/talent/:talent_id
///
/// Five independent reads: talent, addresses, skills, work history, and the
/// latest resume when `includeResume` is the literal `true` (case-insensitive;
/// anything else means false). Ids have no format validation beyond "exists" —
/// a non-numeric id simply resolves to nothing.
pub async fn get_talent(
    State(state): State<AppState>,
    Path(talent_id): Path<String>,
    Query(query): Query<TalentQuery>,
) -> Result<Json<TalentProjection>, AppError> {
    let include_resume = query
        .include_resume
        .as_deref()
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let not_found = || AppError::NotFound("Talent not found".to_string());

    let id: i32 = talent_id.parse().map_err(|_| not_found())?;
    let talent = queries::fetch_talent(&state.db, id)
        .await?
        .ok_or_else(not_found)?;

    let addresses = queries::fetch_addresses(&state.db, id).await?;
    let skills = queries::fetch_skills(&state.db, id).await?;
    let work_history = queries::fetch_work_history(&state.db, id).await?;
    let resume = if include_resume {
        queries::fetch_latest_resume(&state.db, id).await?
    } else {
        None
    };

    Ok(Json(project_talent(
        talent,
        addresses,
        skills,
        work_history,
        resume,
    )))
}

/// GET /front-office/v1/talents/ids/:page/:page_size
///
/// Header and parameter validation happen before any storage access.
pub async fn list_talent_ids(
    State(state): State<AppState>,
    Path((page, page_size)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Vec<i32>>, AppError> {
    let has_tenant = ["Tenant", "FrontOfficeTenantId"].iter().any(|name| {
        headers
            .get(*name)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| !v.is_empty())
    });
    if !has_tenant {
        return Err(AppError::Validation(
            "Either Tenant or FrontOfficeTenantId header is required".to_string(),
        ));
    }

    let (limit, offset) = parse_page_params(&page, &page_size)?;
    let ids = queries::list_talent_ids(&state.db, limit, offset).await?;
    Ok(Json(ids))
}

/// Validates the 1-based page number and page size, returning `(limit, offset)`.
/// An offset whose computation overflows `i64` is as invalid as a non-numeric
/// parameter; it cannot address any row.
pub fn parse_page_params(page: &str, page_size: &str) -> Result<(i64, i64), AppError> {
    let invalid = || AppError::Validation("Invalid page or pageSize parameters".to_string());

    let page: i64 = page.parse().map_err(|_| invalid())?;
    let page_size: i64 = page_size.parse().map_err(|_| invalid())?;
    if page < 1 || page_size < 1 {
        return Err(invalid());
    }

    let offset = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .ok_or_else(invalid)?;

    Ok((page_size, offset))
}
