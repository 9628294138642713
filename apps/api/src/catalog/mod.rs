//! Job Catalog — postings, lifecycle, visibility, and the company-facing
//! read side. Content fields are mutable only through the owning company;
//! the counters on a job belong to the Counter Aggregator.

pub mod handlers;
pub mod validation;

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{Job, JobStatus};
use crate::store::Store;
use validation::CreateJobRequest;

/// Creates a posting for a company. New jobs go straight to
/// `published`/active with zeroed counters.
pub async fn create_job(
    store: &dyn Store,
    company_id: Uuid,
    req: CreateJobRequest,
) -> Result<Job, AppError> {
    let draft = validation::validate(req).map_err(|errors| AppError::Validation(errors.join("; ")))?;

    let job = Job {
        id: Uuid::new_v4(),
        company_id,
        title: draft.title,
        description: draft.description,
        location: draft.location,
        job_type: draft.job_type,
        workplace_type: draft.workplace_type,
        salary: draft.salary,
        benefits: draft.benefits,
        experience: draft.experience,
        skills: draft.skills,
        education: draft.education,
        responsibilities: draft.responsibilities,
        qualifications: draft.qualifications,
        application_deadline: draft.application_deadline,
        status: JobStatus::Published,
        is_active: true,
        views: 0,
        applications: 0,
        created_at: Utc::now(),
    };

    let job = store.insert_job(job).await?;
    info!("Company {company_id} published job {} ({})", job.id, job.title);
    Ok(job)
}

/// Fresh snapshot of the feed-eligible catalog, newest first. Stateless:
/// no cursor survives between calls.
pub async fn list_eligible_jobs(store: &dyn Store) -> Result<Vec<Job>, AppError> {
    store.eligible_jobs(Utc::now()).await
}

pub async fn get_job(store: &dyn Store, id: Uuid) -> Result<Job, AppError> {
    store
        .job(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// Dashboard aggregates over a company's postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyJobStats {
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub total_views: i64,
    pub total_applications: i64,
}

pub fn compute_stats(jobs: &[Job]) -> CompanyJobStats {
    CompanyJobStats {
        total_jobs: jobs.len(),
        active_jobs: jobs
            .iter()
            .filter(|j| j.status == JobStatus::Published && j.is_active)
            .count(),
        total_views: jobs.iter().map(|j| j.views).sum(),
        total_applications: jobs.iter().map(|j| j.applications).sum(),
    }
}

/// All of a company's jobs (any status) plus the dashboard stats.
pub async fn list_company_jobs(
    store: &dyn Store,
    company_id: Uuid,
) -> Result<(Vec<Job>, CompanyJobStats), AppError> {
    let jobs = store.jobs_by_company(company_id).await?;
    let stats = compute_stats(&jobs);
    Ok((jobs, stats))
}

/// Moves a job along `draft -> published -> {closed, filled}`. Only the
/// owning company may call this; anything off the state machine is a
/// validation failure.
pub async fn update_status(
    store: &dyn Store,
    company_id: Uuid,
    job_id: Uuid,
    next: JobStatus,
) -> Result<Job, AppError> {
    let job = get_job(store, job_id).await?;
    if job.company_id != company_id {
        return Err(AppError::Forbidden);
    }
    if !job.status.can_transition_to(next) {
        return Err(AppError::Validation(format!(
            "cannot move a {} job to {}",
            job.status.as_str(),
            next.as_str()
        )));
    }
    let job = store.set_job_lifecycle(job_id, next, job.is_active).await?;
    info!("Job {job_id} moved to {}", next.as_str());
    Ok(job)
}

/// Toggles `is_active`. Independent of status; the owning company can flip
/// it at any time.
pub async fn set_active(
    store: &dyn Store,
    company_id: Uuid,
    job_id: Uuid,
    is_active: bool,
) -> Result<Job, AppError> {
    let job = get_job(store, job_id).await?;
    if job.company_id != company_id {
        return Err(AppError::Forbidden);
    }
    store.set_job_lifecycle(job_id, job.status, is_active).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStore;

    fn create_request() -> CreateJobRequest {
        serde_json::from_value(serde_json::json!({
            "title": "iOS Engineer",
            "description": "Ship the app",
            "location": "NYC",
            "jobType": "full-time",
            "workplaceType": "remote",
            "salary": { "min": 100000, "max": 140000 },
            "experience": { "min": 2 },
            "skills": { "required": ["swift"] },
            "education": { "level": "bachelor" }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_job_defaults() {
        let store = MemStore::new();
        let company = Uuid::new_v4();
        let job = create_job(&store, company, create_request()).await.unwrap();

        assert_eq!(job.status, JobStatus::Published);
        assert!(job.is_active);
        assert_eq!(job.views, 0);
        assert_eq!(job.applications, 0);
        assert_eq!(job.company_id, company);
        assert!(store.job(job.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_job_rejects_invalid_payload() {
        let store = MemStore::new();
        let mut req = create_request();
        req.title = None;
        let err = create_job(&store, Uuid::new_v4(), req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("title")));
    }

    #[tokio::test]
    async fn test_stats_aggregation() {
        let store = MemStore::new();
        let company = Uuid::new_v4();

        let a = create_job(&store, company, create_request()).await.unwrap();
        let b = create_job(&store, company, create_request()).await.unwrap();
        // Another company's job must not leak into the stats.
        create_job(&store, Uuid::new_v4(), create_request())
            .await
            .unwrap();

        store.increment_views(a.id).await.unwrap();
        store.increment_views(a.id).await.unwrap();
        store.increment_applications(b.id).await.unwrap();
        update_status(&store, company, b.id, JobStatus::Closed)
            .await
            .unwrap();

        let (jobs, stats) = list_company_jobs(&store, company).await.unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(
            stats,
            CompanyJobStats {
                total_jobs: 2,
                active_jobs: 1,
                total_views: 2,
                total_applications: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_update_status_enforces_ownership() {
        let store = MemStore::new();
        let job = create_job(&store, Uuid::new_v4(), create_request())
            .await
            .unwrap();
        let err = update_status(&store, Uuid::new_v4(), job.id, JobStatus::Closed)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn test_update_status_rejects_illegal_transition() {
        let store = MemStore::new();
        let company = Uuid::new_v4();
        let job = create_job(&store, company, create_request()).await.unwrap();

        update_status(&store, company, job.id, JobStatus::Filled)
            .await
            .unwrap();
        // filled is terminal
        let err = update_status(&store, company, job.id, JobStatus::Published)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_set_active_round_trip() {
        let store = MemStore::new();
        let company = Uuid::new_v4();
        let job = create_job(&store, company, create_request()).await.unwrap();

        let job = set_active(&store, company, job.id, false).await.unwrap();
        assert!(!job.is_active);
        assert_eq!(job.status, JobStatus::Published);

        let job = set_active(&store, company, job.id, true).await.unwrap();
        assert!(job.is_active);
    }

    #[tokio::test]
    async fn test_set_active_enforces_ownership() {
        let store = MemStore::new();
        let job = create_job(&store, Uuid::new_v4(), create_request())
            .await
            .unwrap();
        let err = set_active(&store, Uuid::new_v4(), job.id, false)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn test_get_job_not_found() {
        let store = MemStore::new();
        assert!(matches!(
            get_job(&store, Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
