use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Identity;
use crate::catalog::validation::CreateJobRequest;
use crate::catalog::{self, CompanyJobStats};
use crate::errors::AppError;
use crate::models::job::{Job, JobStatus};
use crate::state::AppState;

/// POST /api/recruiter/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    identity: Identity,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let company_id = identity.require_company()?;
    let job = catalog::create_job(state.store.as_ref(), company_id, req).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

#[derive(Serialize)]
pub struct CompanyJobsResponse {
    pub jobs: Vec<Job>,
    pub stats: CompanyJobStats,
}

/// GET /api/recruiter/jobs
pub async fn handle_company_jobs(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<CompanyJobsResponse>, AppError> {
    let company_id = identity.require_company()?;
    let (jobs, stats) = catalog::list_company_jobs(state.store.as_ref(), company_id).await?;
    Ok(Json(CompanyJobsResponse { jobs, stats }))
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: JobStatus,
}

/// PATCH /api/recruiter/jobs/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Job>, AppError> {
    let company_id = identity.require_company()?;
    let job = catalog::update_status(state.store.as_ref(), company_id, id, req.status).await?;
    Ok(Json(job))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveRequest {
    pub is_active: bool,
}

/// PATCH /api/recruiter/jobs/:id/active
pub async fn handle_set_active(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<SetActiveRequest>,
) -> Result<Json<Job>, AppError> {
    let company_id = identity.require_company()?;
    let job = catalog::set_active(state.store.as_ref(), company_id, id, req.is_active).await?;
    Ok(Json(job))
}
