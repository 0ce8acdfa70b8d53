//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BandsiteError`] via `#[from]`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum BandsiteError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("access denied")]
    Access(#[from] AccessError),

    /// An adapter-level storage failure (connection, constraint, deadlock).
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// A lookup for a specific record found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Authentication and authorisation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("{action} requires the admin role")]
    Forbidden { action: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_bandsite_error() {
        let err: BandsiteError = ValidationError::EmptyTitle.into();
        assert!(matches!(
            err,
            BandsiteError::Validation(ValidationError::EmptyTitle)
        ));
    }

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Event",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Event abc not found");
    }

    #[test]
    fn should_name_action_when_forbidden() {
        let err = AccessError::Forbidden {
            action: "create event",
        };
        assert_eq!(err.to_string(), "create event requires the admin role");
    }
}
