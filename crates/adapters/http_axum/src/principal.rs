//! Caller identity as forwarded by the login gateway.
//!
//! Login itself happens upstream; by the time a request reaches this
//! service the gateway has verified the session and set the identity
//! headers below. Requests without a user id are anonymous.

use axum::http::HeaderMap;

use bandsite_domain::error::{AccessError, ValidationError};
use bandsite_domain::id::UserId;
use bandsite_domain::user::Role;

/// Header carrying the authenticated subject.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the caller's role (`admin` or `member`); defaults to `member`.
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub role: Role,
}

impl Principal {
    /// Read the caller from request headers.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Unauthenticated`] when the user id header is
    /// missing or blank, and [`ValidationError::UnknownRole`] for a role
    /// header that is not recognised.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, crate::error::ApiError> {
        let user_id = headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| UserId::new(value).ok())
            .ok_or(AccessError::Unauthenticated)?;

        let role = match headers.get(USER_ROLE_HEADER) {
            None => Role::default(),
            Some(value) => value
                .to_str()
                .map_err(|_| ValidationError::UnknownRole("<non-ascii>".to_string()))?
                .parse()?,
        };

        Ok(Self { user_id, role })
    }

    /// Fail unless the caller is an admin.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Forbidden`] naming `action` for non-admins.
    pub fn require_admin(&self, action: &'static str) -> Result<(), AccessError> {
        if self.role.can_manage_content() {
            Ok(())
        } else {
            Err(AccessError::Forbidden { action })
        }
    }
}
