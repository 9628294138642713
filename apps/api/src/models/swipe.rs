use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Pass,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeAction::Like => "like",
            SwipeAction::Pass => "pass",
        }
    }
}

/// One irrevocable decision by a student on a job. Keyed by the
/// (student_id, job_id) pair; there is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRecord {
    pub student_id: Uuid,
    pub job_id: Uuid,
    pub action: SwipeAction,
    pub created_at: DateTime<Utc>,
}

impl SwipeRecord {
    pub fn new(student_id: Uuid, job_id: Uuid, action: SwipeAction) -> Self {
        SwipeRecord {
            student_id,
            job_id,
            action,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_format() {
        assert_eq!(serde_json::to_value(SwipeAction::Like).unwrap(), "like");
        assert_eq!(serde_json::to_value(SwipeAction::Pass).unwrap(), "pass");
        assert!(serde_json::from_str::<SwipeAction>("\"superlike\"").is_err());
    }
}
