//! Counter Aggregator — reactive maintenance of the denormalized `views`
//! and `applications` tallies on jobs.
//!
//! Counter bumps are best-effort by contract: a failed increment degrades
//! the aggregate count but must never fail the feed or swipe operation
//! that already succeeded on its primary invariant. Failures land in the
//! log at warn level.

use tracing::warn;
use uuid::Uuid;

use crate::store::Store;

/// Bumps `views` after a feed presentation (or a detail fetch, when the
/// deployment opts in via `COUNT_DETAIL_VIEWS`).
pub async fn bump_views(store: &dyn Store, job_id: Uuid) {
    if let Err(e) = store.increment_views(job_id).await {
        warn!("View count for job {job_id} not recorded: {e}");
    }
}

/// Bumps `applications` after a successful `like` swipe.
pub async fn bump_applications(store: &dyn Store, job_id: Uuid) {
    if let Err(e) = store.increment_applications(job_id).await {
        warn!("Application count for job {job_id} not recorded: {e}");
    }
}
