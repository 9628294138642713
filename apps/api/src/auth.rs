//! Verified caller identity, resolved by the upstream auth collaborator.
//!
//! The gateway in front of this service validates the bearer token and
//! forwards the subject as two headers; the core never sees credentials.
//! Role gating is a capability check on the tagged union below, not
//! inheritance.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::errors::AppError;

pub const SUBJECT_HEADER: &str = "x-auth-subject";
pub const ROLE_HEADER: &str = "x-auth-role";

/// The two principals the platform knows about. Students swipe; companies
/// post jobs and read their own stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Student(Uuid),
    Company(Uuid),
}

impl Identity {
    /// Parses the identity headers the auth boundary injects.
    /// Missing or malformed headers mean the request never passed the
    /// collaborator, so the caller is unauthenticated.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let subject = headers
            .get(SUBJECT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .ok_or(AppError::Unauthorized)?;

        match headers.get(ROLE_HEADER).and_then(|v| v.to_str().ok()) {
            Some("student") => Ok(Identity::Student(subject)),
            Some("company") => Ok(Identity::Company(subject)),
            _ => Err(AppError::Unauthorized),
        }
    }

    /// The student id, or `Forbidden` when a company calls a student-only
    /// operation.
    pub fn require_student(&self) -> Result<Uuid, AppError> {
        match self {
            Identity::Student(id) => Ok(*id),
            Identity::Company(_) => Err(AppError::Forbidden),
        }
    }

    /// The company id, or `Forbidden` when a student calls a company-only
    /// operation.
    pub fn require_company(&self) -> Result<Uuid, AppError> {
        match self {
            Identity::Company(id) => Ok(*id),
            Identity::Student(_) => Err(AppError::Forbidden),
        }
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Identity::from_headers(&parts.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(subject: &str, role: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(SUBJECT_HEADER, HeaderValue::from_str(subject).unwrap());
        h.insert(ROLE_HEADER, HeaderValue::from_str(role).unwrap());
        h
    }

    #[test]
    fn test_parses_student_identity() {
        let id = Uuid::new_v4();
        let identity = Identity::from_headers(&headers(&id.to_string(), "student")).unwrap();
        assert_eq!(identity, Identity::Student(id));
        assert_eq!(identity.require_student().unwrap(), id);
    }

    #[test]
    fn test_parses_company_identity() {
        let id = Uuid::new_v4();
        let identity = Identity::from_headers(&headers(&id.to_string(), "company")).unwrap();
        assert_eq!(identity, Identity::Company(id));
        assert_eq!(identity.require_company().unwrap(), id);
    }

    #[test]
    fn test_missing_headers_is_unauthorized() {
        assert!(matches!(
            Identity::from_headers(&HeaderMap::new()),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_unknown_role_is_unauthorized() {
        let id = Uuid::new_v4().to_string();
        assert!(matches!(
            Identity::from_headers(&headers(&id, "admin")),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_garbled_subject_is_unauthorized() {
        assert!(matches!(
            Identity::from_headers(&headers("not-a-uuid", "student")),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_role_gates_are_capability_checks() {
        let student = Identity::Student(Uuid::new_v4());
        let company = Identity::Company(Uuid::new_v4());
        assert!(matches!(
            student.require_company(),
            Err(AppError::Forbidden)
        ));
        assert!(matches!(
            company.require_student(),
            Err(AppError::Forbidden)
        ));
    }
}
