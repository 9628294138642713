//! Swipe Ledger — the durable record of student decisions, and the source
//! of truth for feed exclusion and application counts.
//!
//! A pair (student, job) gets exactly one record, ever. The uniqueness
//! check-and-insert is a single atomic operation inside the store; this
//! module never does a read-then-write existence check.

pub mod handlers;

use std::collections::HashSet;

use tracing::info;
use uuid::Uuid;

use crate::counters;
use crate::errors::AppError;
use crate::models::swipe::{SwipeAction, SwipeRecord};
use crate::store::Store;

/// Records an irrevocable decision. `Validation` when the job does not
/// exist, `DuplicateSwipe` when the pair already carries a decision.
/// A `like` additionally bumps the job's application tally, best-effort.
pub async fn record_swipe(
    store: &dyn Store,
    student_id: Uuid,
    job_id: Uuid,
    action: SwipeAction,
) -> Result<SwipeRecord, AppError> {
    if store.job(job_id).await?.is_none() {
        return Err(AppError::Validation(format!(
            "job {job_id} does not exist"
        )));
    }

    let record = store
        .insert_swipe(SwipeRecord::new(student_id, job_id, action))
        .await?;

    info!(
        "Student {student_id} swiped {} on job {job_id}",
        record.action.as_str()
    );

    if record.action == SwipeAction::Like {
        counters::bump_applications(store, job_id).await;
    }

    Ok(record)
}

pub async fn has_swiped(
    store: &dyn Store,
    student_id: Uuid,
    job_id: Uuid,
) -> Result<bool, AppError> {
    store.has_swiped(student_id, job_id).await
}

/// Every job the student has already decided on, either action. The Feed
/// Generator subtracts this set from the eligible catalog.
pub async fn swiped_job_ids(
    store: &dyn Store,
    student_id: Uuid,
) -> Result<HashSet<Uuid>, AppError> {
    store.swiped_job_ids(student_id).await
}
