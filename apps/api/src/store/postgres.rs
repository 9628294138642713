//! PostgreSQL store. The swipe uniqueness constraint is the composite
//! primary key on job_swipes; `insert_swipe` leans on `ON CONFLICT DO
//! NOTHING` so the race between two handlers resolves inside the database.
//! Counter bumps are single-statement `SET x = x + 1` updates.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{Job, JobStatus, JobType, WorkplaceType};
use crate::models::swipe::SwipeRecord;
use crate::store::Store;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw jobs row. Enum columns come back as text, the nested requirement
/// blocks as JSONB; `TryFrom` lifts them into the domain type.
#[derive(Debug, FromRow)]
struct JobRow {
    id: Uuid,
    company_id: Uuid,
    title: String,
    description: String,
    location: String,
    job_type: String,
    workplace_type: String,
    salary: Value,
    benefits: Vec<String>,
    experience: Value,
    skills: Value,
    education: Value,
    responsibilities: Vec<String>,
    qualifications: Vec<String>,
    application_deadline: Option<DateTime<Utc>>,
    status: String,
    is_active: bool,
    views: i64,
    applications: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for Job {
    type Error = AppError;

    fn try_from(row: JobRow) -> Result<Self, AppError> {
        let id = row.id;
        let corrupt =
            move |field: &str| AppError::Internal(anyhow::anyhow!("jobs row {id}: bad {field} column"));
        Ok(Job {
            job_type: JobType::parse(&row.job_type).ok_or_else(|| corrupt("job_type"))?,
            workplace_type: WorkplaceType::parse(&row.workplace_type)
                .ok_or_else(|| corrupt("workplace_type"))?,
            status: JobStatus::parse(&row.status).ok_or_else(|| corrupt("status"))?,
            salary: serde_json::from_value(row.salary).map_err(|_| corrupt("salary"))?,
            experience: serde_json::from_value(row.experience)
                .map_err(|_| corrupt("experience"))?,
            skills: serde_json::from_value(row.skills).map_err(|_| corrupt("skills"))?,
            education: serde_json::from_value(row.education).map_err(|_| corrupt("education"))?,
            id: row.id,
            company_id: row.company_id,
            title: row.title,
            description: row.description,
            location: row.location,
            benefits: row.benefits,
            responsibilities: row.responsibilities,
            qualifications: row.qualifications,
            application_deadline: row.application_deadline,
            is_active: row.is_active,
            views: row.views,
            applications: row.applications,
            created_at: row.created_at,
        })
    }
}

fn rows_to_jobs(rows: Vec<JobRow>) -> Result<Vec<Job>, AppError> {
    rows.into_iter().map(Job::try_from).collect()
}

#[async_trait]
impl Store for PgStore {
    async fn insert_job(&self, job: Job) -> Result<Job, AppError> {
        sqlx::query(
            r#"
            INSERT INTO jobs
                (id, company_id, title, description, location, job_type,
                 workplace_type, salary, benefits, experience, skills,
                 education, responsibilities, qualifications,
                 application_deadline, status, is_active, views,
                 applications, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            "#,
        )
        .bind(job.id)
        .bind(job.company_id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(job.job_type.as_str())
        .bind(job.workplace_type.as_str())
        .bind(serde_json::to_value(&job.salary).map_err(anyhow::Error::from)?)
        .bind(&job.benefits)
        .bind(serde_json::to_value(&job.experience).map_err(anyhow::Error::from)?)
        .bind(serde_json::to_value(&job.skills).map_err(anyhow::Error::from)?)
        .bind(serde_json::to_value(&job.education).map_err(anyhow::Error::from)?)
        .bind(&job.responsibilities)
        .bind(&job.qualifications)
        .bind(job.application_deadline)
        .bind(job.status.as_str())
        .bind(job.is_active)
        .bind(job.views)
        .bind(job.applications)
        .bind(job.created_at)
        .execute(&self.pool)
        .await?;
        Ok(job)
    }

    async fn job(&self, id: Uuid) -> Result<Option<Job>, AppError> {
        let row: Option<JobRow> = sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Job::try_from).transpose()
    }

    async fn eligible_jobs(&self, now: DateTime<Utc>) -> Result<Vec<Job>, AppError> {
        let rows: Vec<JobRow> = sqlx::query_as(
            r#"
            SELECT * FROM jobs
            WHERE status = 'published'
              AND is_active
              AND (application_deadline IS NULL OR application_deadline > $1)
            ORDER BY created_at DESC, id ASC
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;
        rows_to_jobs(rows)
    }

    async fn jobs_by_company(&self, company_id: Uuid) -> Result<Vec<Job>, AppError> {
        let rows: Vec<JobRow> = sqlx::query_as(
            "SELECT * FROM jobs WHERE company_id = $1 ORDER BY created_at DESC, id ASC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        rows_to_jobs(rows)
    }

    async fn set_job_lifecycle(
        &self,
        id: Uuid,
        status: JobStatus,
        is_active: bool,
    ) -> Result<Job, AppError> {
        let row: Option<JobRow> = sqlx::query_as(
            "UPDATE jobs SET status = $2, is_active = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Job::try_from)
            .transpose()?
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE jobs SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Job {id} not found")));
        }
        Ok(())
    }

    async fn increment_applications(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE jobs SET applications = applications + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Job {id} not found")));
        }
        Ok(())
    }

    async fn insert_swipe(&self, record: SwipeRecord) -> Result<SwipeRecord, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO job_swipes (student_id, job_id, action, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (student_id, job_id) DO NOTHING
            "#,
        )
        .bind(record.student_id)
        .bind(record.job_id)
        .bind(record.action.as_str())
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::DuplicateSwipe);
        }
        Ok(record)
    }

    async fn has_swiped(&self, student_id: Uuid, job_id: Uuid) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM job_swipes WHERE student_id = $1 AND job_id = $2)",
        )
        .bind(student_id)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn swiped_job_ids(&self, student_id: Uuid) -> Result<HashSet<Uuid>, AppError> {
        let ids: Vec<Uuid> =
            sqlx::query_scalar("SELECT job_id FROM job_swipes WHERE student_id = $1")
                .bind(student_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(ids.into_iter().collect())
    }
}
