//! Create-job input validation. Everything arrives optional on the wire so
//! one request can report every missing field at once, instead of failing
//! on the first deserialization error.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::job::{
    EducationLevel, EducationRequirement, ExperienceRequirement, JobType, Salary, SalaryPeriod,
    SkillRequirements, WorkplaceType,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub workplace_type: Option<WorkplaceType>,
    pub salary: Option<SalaryInput>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub experience: Option<ExperienceInput>,
    pub skills: Option<SkillsInput>,
    pub education: Option<EducationInput>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub application_deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct SalaryInput {
    pub min: Option<i64>,
    pub max: Option<i64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_period")]
    pub period: SalaryPeriod,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_period() -> SalaryPeriod {
    SalaryPeriod::Yearly
}

#[derive(Debug, Deserialize)]
pub struct ExperienceInput {
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub preferred: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsInput {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub preferred: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EducationInput {
    pub level: Option<EducationLevel>,
    pub field: Option<String>,
}

/// The validated content block of a new posting; identity, lifecycle
/// defaults and counters are stamped on by the catalog.
#[derive(Debug)]
pub struct JobDraft {
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
}

/// Checks the required fields and the salary bounds, collecting every
/// failure before reporting.
pub fn validate(req: CreateJobRequest) -> Result<JobDraft, Vec<String>> {
    let mut errors = Vec::new();

    let require_text = |value: Option<String>, field: &str, errors: &mut Vec<String>| match value {
        Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => {
            errors.push(format!("{field} is required"));
            None
        }
    };

    let title = require_text(req.title, "title", &mut errors);
    let description = require_text(req.description, "description", &mut errors);
    let location = require_text(req.location, "location", &mut errors);

    if req.job_type.is_none() {
        errors.push("jobType is required".to_string());
    }
    if req.workplace_type.is_none() {
        errors.push("workplaceType is required".to_string());
    }

    let salary = match req.salary {
        Some(s) => {
            if s.min.is_none() {
                errors.push("salary.min is required".to_string());
            }
            if s.max.is_none() {
                errors.push("salary.max is required".to_string());
            }
            match (s.min, s.max) {
                (Some(min), Some(max)) if min > max => {
                    errors.push("salary.min must not exceed salary.max".to_string());
                    None
                }
                (Some(min), Some(max)) => Some(Salary {
                    min,
                    max,
                    currency: s.currency,
                    period: s.period,
                }),
                _ => None,
            }
        }
        None => {
            errors.push("salary.min is required".to_string());
            errors.push("salary.max is required".to_string());
            None
        }
    };

    let experience = match req.experience.and_then(|e| {
        e.min.map(|min| ExperienceRequirement {
            min,
            max: e.max,
            preferred: e.preferred,
        })
    }) {
        Some(e) => Some(e),
        None => {
            errors.push("experience.min is required".to_string());
            None
        }
    };

    let skills = match req.skills {
        Some(s) if !s.required.is_empty() => Some(SkillRequirements {
            required: s.required,
            preferred: s.preferred,
        }),
        _ => {
            errors.push("skills.required must not be empty".to_string());
            None
        }
    };

    let education = match req.education.and_then(|e| {
        e.level.map(|level| EducationRequirement {
            level,
            field: e.field,
        })
    }) {
        Some(e) => Some(e),
        None => {
            errors.push("education.level is required".to_string());
            None
        }
    };

    // Every failure above left a None behind, so an all-Some tuple means a
    // clean request.
    match (
        title,
        description,
        location,
        req.job_type,
        req.workplace_type,
        salary,
        experience,
        skills,
        education,
    ) {
        (
            Some(title),
            Some(description),
            Some(location),
            Some(job_type),
            Some(workplace_type),
            Some(salary),
            Some(experience),
            Some(skills),
            Some(education),
        ) => Ok(JobDraft {
            title,
            description,
            location,
            job_type,
            workplace_type,
            salary,
            benefits: req.benefits,
            experience,
            skills,
            education,
            responsibilities: req.responsibilities,
            qualifications: req.qualifications,
            application_deadline: req.application_deadline,
        }),
        _ => Err(errors),
    }
}
