//! Storage — pluggable, trait-based store for jobs and swipe records.
//!
//! Default: `MemStore` (arena + unique-index maps, fully testable).
//! Production: `PgStore` (sqlx/PostgreSQL, composite primary key).
//!
//! `AppState` holds an `Arc<dyn Store>`, swapped at startup via config.
//!
//! The two operations with real concurrency hazards live here, behind the
//! trait, so each backend can make them atomic in its own way:
//! `insert_swipe` (insert-or-fail on the (student, job) key — never
//! check-then-insert at the application layer) and the counter bumps
//! (`views = views + 1` as a single storage-level operation).

pub mod memory;
pub mod postgres;

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{Job, JobStatus};
use crate::models::swipe::SwipeRecord;

#[async_trait]
pub trait Store: Send + Sync {
    // ── jobs ────────────────────────────────────────────────────────────

    async fn insert_job(&self, job: Job) -> Result<Job, AppError>;

    async fn job(&self, id: Uuid) -> Result<Option<Job>, AppError>;

    /// Feed-eligible jobs evaluated against `now`, ordered newest first,
    /// id ascending on equal timestamps. Stateless; callers may re-invoke
    /// at any time for a fresh snapshot.
    async fn eligible_jobs(&self, now: DateTime<Utc>) -> Result<Vec<Job>, AppError>;

    /// All jobs owned by a company, any status, newest first.
    async fn jobs_by_company(&self, company_id: Uuid) -> Result<Vec<Job>, AppError>;

    /// Overwrites the lifecycle pair on an existing job. Ownership and
    /// transition legality are checked by the catalog before calling.
    async fn set_job_lifecycle(
        &self,
        id: Uuid,
        status: JobStatus,
        is_active: bool,
    ) -> Result<Job, AppError>;

    /// Atomic `views + 1`. `NotFound` when the job does not exist.
    async fn increment_views(&self, id: Uuid) -> Result<(), AppError>;

    /// Atomic `applications + 1`. `NotFound` when the job does not exist.
    async fn increment_applications(&self, id: Uuid) -> Result<(), AppError>;

    // ── swipes ──────────────────────────────────────────────────────────

    /// Insert-or-fail on the composite (student_id, job_id) key.
    /// `DuplicateSwipe` when a record for the pair already exists; the
    /// existing record is never overwritten.
    async fn insert_swipe(&self, record: SwipeRecord) -> Result<SwipeRecord, AppError>;

    async fn has_swiped(&self, student_id: Uuid, job_id: Uuid) -> Result<bool, AppError>;

    /// Every job the student has decided on, either action.
    async fn swiped_job_ids(&self, student_id: Uuid) -> Result<HashSet<Uuid>, AppError>;
}
