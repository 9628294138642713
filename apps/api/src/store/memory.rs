//! In-memory store: two maps behind `RwLock`s, the swipe map keyed by the
//! composite (student_id, job_id) so uniqueness falls out of `entry`
//! occupancy under the write lock. Backs local development and the test
//! suite; production deployments point `DATABASE_URL` at PostgreSQL.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{Job, JobStatus};
use crate::models::swipe::SwipeRecord;
use crate::store::Store;

#[derive(Default)]
pub struct MemStore {
    jobs: RwLock<HashMap<Uuid, Job>>,
    swipes: RwLock<HashMap<(Uuid, Uuid), SwipeRecord>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// A poisoned lock means a writer panicked mid-update; surfaced as an
// internal error, never unwrapped.
fn lock_err<T>(_: T) -> AppError {
    AppError::Internal(anyhow::anyhow!("store lock poisoned"))
}

#[async_trait]
impl Store for MemStore {
    async fn insert_job(&self, job: Job) -> Result<Job, AppError> {
        let mut jobs = self.jobs.write().map_err(lock_err)?;
        jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn job(&self, id: Uuid) -> Result<Option<Job>, AppError> {
        let jobs = self.jobs.read().map_err(lock_err)?;
        Ok(jobs.get(&id).cloned())
    }

    async fn eligible_jobs(&self, now: DateTime<Utc>) -> Result<Vec<Job>, AppError> {
        let jobs = self.jobs.read().map_err(lock_err)?;
        let mut eligible: Vec<Job> = jobs
            .values()
            .filter(|j| j.is_feed_eligible(now))
            .cloned()
            .collect();
        eligible.sort_by(Job::newest_first);
        Ok(eligible)
    }

    async fn jobs_by_company(&self, company_id: Uuid) -> Result<Vec<Job>, AppError> {
        let jobs = self.jobs.read().map_err(lock_err)?;
        let mut owned: Vec<Job> = jobs
            .values()
            .filter(|j| j.company_id == company_id)
            .cloned()
            .collect();
        owned.sort_by(Job::newest_first);
        Ok(owned)
    }

    async fn set_job_lifecycle(
        &self,
        id: Uuid,
        status: JobStatus,
        is_active: bool,
    ) -> Result<Job, AppError> {
        let mut jobs = self.jobs.write().map_err(lock_err)?;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
        job.status = status;
        job.is_active = is_active;
        Ok(job.clone())
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), AppError> {
        let mut jobs = self.jobs.write().map_err(lock_err)?;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
        job.views += 1;
        Ok(())
    }

    async fn increment_applications(&self, id: Uuid) -> Result<(), AppError> {
        let mut jobs = self.jobs.write().map_err(lock_err)?;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
        job.applications += 1;
        Ok(())
    }

    async fn insert_swipe(&self, record: SwipeRecord) -> Result<SwipeRecord, AppError> {
        let mut swipes = self.swipes.write().map_err(lock_err)?;
        // Check-and-insert is atomic here: both happen under the same write
        // lock, through a single entry lookup.
        match swipes.entry((record.student_id, record.job_id)) {
            std::collections::hash_map::Entry::Occupied(_) => Err(AppError::DuplicateSwipe),
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn has_swiped(&self, student_id: Uuid, job_id: Uuid) -> Result<bool, AppError> {
        let swipes = self.swipes.read().map_err(lock_err)?;
        Ok(swipes.contains_key(&(student_id, job_id)))
    }

    async fn swiped_job_ids(&self, student_id: Uuid) -> Result<HashSet<Uuid>, AppError> {
        let swipes = self.swipes.read().map_err(lock_err)?;
        Ok(swipes
            .keys()
            .filter(|(s, _)| *s == student_id)
            .map(|(_, j)| *j)
            .collect())
    }
}
