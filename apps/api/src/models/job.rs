use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle: `draft -> published -> {closed, filled}`. A job in `closed`
/// or `filled` never re-enters the feed, whatever `is_active` says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Draft,
    Published,
    Closed,
    Filled,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Draft => "draft",
            JobStatus::Published => "published",
            JobStatus::Closed => "closed",
            JobStatus::Filled => "filled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(JobStatus::Draft),
            "published" => Some(JobStatus::Published),
            "closed" => Some(JobStatus::Closed),
            "filled" => Some(JobStatus::Filled),
            _ => None,
        }
    }

    /// Legal lifecycle transitions. Terminal states have no exits.
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        matches!(
            (self, next),
            (JobStatus::Draft, JobStatus::Published)
                | (JobStatus::Published, JobStatus::Closed)
                | (JobStatus::Published, JobStatus::Filled)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
            JobType::Temporary => "temporary",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "full-time" => Some(JobType::FullTime),
            "part-time" => Some(JobType::PartTime),
            "contract" => Some(JobType::Contract),
            "internship" => Some(JobType::Internship),
            "temporary" => Some(JobType::Temporary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkplaceType {
    OnSite,
    Hybrid,
    Remote,
}

impl WorkplaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkplaceType::OnSite => "on-site",
            WorkplaceType::Hybrid => "hybrid",
            WorkplaceType::Remote => "remote",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "on-site" => Some(WorkplaceType::OnSite),
            "hybrid" => Some(WorkplaceType::Hybrid),
            "remote" => Some(WorkplaceType::Remote),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryPeriod {
    Hourly,
    Monthly,
    Yearly,
}

impl SalaryPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryPeriod::Hourly => "hourly",
            SalaryPeriod::Monthly => "monthly",
            SalaryPeriod::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    HighSchool,
    Bachelor,
    Master,
    Phd,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salary {
    pub min: i64,
    pub max: i64,
    pub currency: String,
    pub period: SalaryPeriod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceRequirement {
    pub min: u32,
    pub max: Option<u32>,
    pub preferred: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRequirements {
    pub required: Vec<String>,
    #[serde(default)]
    pub preferred: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationRequirement {
    pub level: EducationLevel,
    pub field: Option<String>,
}

/// A recruiter-posted job. Content fields are mutable only by the owning
/// company; `views` and `applications` are denormalized aggregates bumped
/// atomically by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: JobType,
    pub workplace_type: WorkplaceType,
    pub salary: Salary,
    pub benefits: Vec<String>,
    pub experience: ExperienceRequirement,
    pub skills: SkillRequirements,
    pub education: EducationRequirement,
    pub responsibilities: Vec<String>,
    pub qualifications: Vec<String>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub status: JobStatus,
    pub is_active: bool,
    pub views: i64,
    pub applications: i64,
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Feed eligibility predicate: published, active, and either no deadline
    /// or a deadline strictly in the future. A deadline equal to `now` is
    /// already expired.
    pub fn is_feed_eligible(&self, now: DateTime<Utc>) -> bool {
        self.status == JobStatus::Published
            && self.is_active
            && self.application_deadline.map_or(true, |d| d > now)
    }

    /// Catalog presentation order: newest first, id ascending as the stable
    /// tie-break for jobs created at the same instant.
    pub fn newest_first(a: &Job, b: &Job) -> std::cmp::Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Human-readable salary range, e.g. `"USD 90000 – 120000 per yearly"`.
    pub fn salary_range(&self) -> String {
        format!(
            "{} {} – {} per {}",
            self.salary.currency,
            self.salary.min,
            self.salary.max,
            self.salary.period.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_job(status: JobStatus, is_active: bool, deadline: Option<DateTime<Utc>>) -> Job {
        Job {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            description: "Own the matching pipeline".to_string(),
            location: "Berlin".to_string(),
            job_type: JobType::FullTime,
            workplace_type: WorkplaceType::Hybrid,
            salary: Salary {
                min: 90_000,
                max: 120_000,
                currency: "USD".to_string(),
                period: SalaryPeriod::Yearly,
            },
            benefits: vec![],
            experience: ExperienceRequirement {
                min: 2,
                max: None,
                preferred: None,
            },
            skills: SkillRequirements {
                required: vec!["rust".to_string()],
                preferred: vec![],
            },
            education: EducationRequirement {
                level: EducationLevel::Bachelor,
                field: None,
            },
            responsibilities: vec![],
            qualifications: vec![],
            application_deadline: deadline,
            status,
            is_active,
            views: 0,
            applications: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_published_active_no_deadline_is_eligible() {
        let job = sample_job(JobStatus::Published, true, None);
        assert!(job.is_feed_eligible(Utc::now()));
    }

    #[test]
    fn test_deadline_in_future_is_eligible() {
        let now = Utc::now();
        let job = sample_job(JobStatus::Published, true, Some(now + Duration::hours(1)));
        assert!(job.is_feed_eligible(now));
    }

    #[test]
    fn test_deadline_exactly_now_is_excluded() {
        let now = Utc::now();
        let job = sample_job(JobStatus::Published, true, Some(now));
        assert!(!job.is_feed_eligible(now));
    }

    #[test]
    fn test_inactive_is_excluded_even_when_published() {
        let job = sample_job(JobStatus::Published, false, None);
        assert!(!job.is_feed_eligible(Utc::now()));
    }

    #[test]
    fn test_closed_is_excluded_even_when_active() {
        let job = sample_job(JobStatus::Closed, true, None);
        assert!(!job.is_feed_eligible(Utc::now()));
    }

    #[test]
    fn test_filled_and_draft_are_excluded() {
        assert!(!sample_job(JobStatus::Filled, true, None).is_feed_eligible(Utc::now()));
        assert!(!sample_job(JobStatus::Draft, true, None).is_feed_eligible(Utc::now()));
    }

    #[test]
    fn test_status_transitions() {
        assert!(JobStatus::Draft.can_transition_to(JobStatus::Published));
        assert!(JobStatus::Published.can_transition_to(JobStatus::Closed));
        assert!(JobStatus::Published.can_transition_to(JobStatus::Filled));
        assert!(!JobStatus::Draft.can_transition_to(JobStatus::Closed));
        assert!(!JobStatus::Closed.can_transition_to(JobStatus::Published));
        assert!(!JobStatus::Filled.can_transition_to(JobStatus::Published));
        assert!(!JobStatus::Published.can_transition_to(JobStatus::Draft));
    }

    #[test]
    fn test_salary_range_format() {
        let job = sample_job(JobStatus::Published, true, None);
        assert_eq!(job.salary_range(), "USD 90000 – 120000 per yearly");
    }

    #[test]
    fn test_wire_format_matches_client() {
        let job = sample_job(JobStatus::Published, true, None);
        let v = serde_json::to_value(&job).unwrap();
        assert_eq!(v["jobType"], "full-time");
        assert_eq!(v["workplaceType"], "hybrid");
        assert_eq!(v["status"], "published");
        assert_eq!(v["isActive"], true);
        assert_eq!(v["education"]["level"], "bachelor");
        assert_eq!(v["salary"]["period"], "yearly");
    }
}
