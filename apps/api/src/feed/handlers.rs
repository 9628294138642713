use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Identity;
use crate::catalog;
use crate::counters;
use crate::errors::AppError;
use crate::feed;
use crate::models::job::Job;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FeedQuery {
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct FeedResponse {
    pub jobs: Vec<Job>,
}

/// GET /api/jobs
pub async fn handle_feed(
    State(state): State<AppState>,
    identity: Identity,
    Query(params): Query<FeedQuery>,
) -> Result<Json<FeedResponse>, AppError> {
    let student_id = identity.require_student()?;
    let cap = state.config.feed_batch_limit;
    let limit = params.limit.unwrap_or(cap).min(cap);
    let jobs = feed::next_batch(state.store.as_ref(), student_id, limit).await?;
    Ok(Json(FeedResponse { jobs }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailResponse {
    #[serde(flatten)]
    pub job: Job,
    pub salary_range: String,
}

/// GET /api/jobs/:id
/// Direct detail lookup, e.g. a shared link. Counts as a view only when
/// the deployment opts in via `COUNT_DETAIL_VIEWS`.
pub async fn handle_job_detail(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<Json<JobDetailResponse>, AppError> {
    identity.require_student()?;
    let job = catalog::get_job(state.store.as_ref(), id).await?;
    if state.config.count_detail_views {
        counters::bump_views(state.store.as_ref(), id).await;
    }
    let salary_range = job.salary_range();
    Ok(Json(JobDetailResponse { job, salary_range }))
}
