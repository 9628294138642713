//! Feed Generator — the next jobs a student gets to decide on.
//!
//! A batch is the eligible catalog minus the student's ledger, truncated
//! to the requested limit in catalog order. Each job returned counts one
//! view; a job the student already swiped is never re-shown and never
//! re-counted. An empty batch means "no more jobs right now", not an
//! error — eligibility shifts as postings open and deadlines pass.

pub mod handlers;

use std::collections::HashSet;

use uuid::Uuid;

use crate::catalog;
use crate::counters;
use crate::errors::AppError;
use crate::ledger;
use crate::models::job::Job;
use crate::store::Store;

/// Subtracts the exclusion set and truncates. `eligible` arrives already
/// in catalog order (newest first, id ascending tie-break), which this
/// preserves.
pub fn select_batch(eligible: Vec<Job>, swiped: &HashSet<Uuid>, limit: usize) -> Vec<Job> {
    eligible
        .into_iter()
        .filter(|job| !swiped.contains(&job.id))
        .take(limit)
        .collect()
}

/// Computes the student's next batch and counts one view per returned job.
/// View bumps are best-effort: a failed increment undercounts the tally
/// but the batch stays valid for display.
pub async fn next_batch(
    store: &dyn Store,
    student_id: Uuid,
    limit: usize,
) -> Result<Vec<Job>, AppError> {
    let eligible = catalog::list_eligible_jobs(store).await?;
    let swiped = ledger::swiped_job_ids(store, student_id).await?;
    let batch = select_batch(eligible, &swiped, limit);

    for job in &batch {
        counters::bump_views(store, job.id).await;
    }

    Ok(batch)
}
