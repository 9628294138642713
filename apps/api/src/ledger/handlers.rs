use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Identity;
use crate::errors::AppError;
use crate::ledger;
use crate::models::swipe::{SwipeAction, SwipeRecord};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRequest {
    pub job_id: Uuid,
    pub action: SwipeAction,
}

#[derive(Serialize)]
pub struct SwipeResponse {
    pub swipe: SwipeRecord,
}

/// POST /api/jobs/swipe
pub async fn handle_swipe(
    State(state): State<AppState>,
    identity: Identity,
    Json(req): Json<SwipeRequest>,
) -> Result<(StatusCode, Json<SwipeResponse>), AppError> {
    let student_id = identity.require_student()?;
    let swipe =
        ledger::record_swipe(state.store.as_ref(), student_id, req.job_id, req.action).await?;
    Ok((StatusCode::CREATED, Json(SwipeResponse { swipe })))
}
