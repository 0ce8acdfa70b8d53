//! User — an identity forwarded by the login provider.
//!
//! Users are upserted on every login; the rest of the system only ever
//! refers to them through [`UserId`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::UserId;

/// What a user is allowed to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manages site content (events, songs, contacts).
    Admin,
    /// Regular visitor; may like events.
    #[default]
    Member,
}

impl Role {
    /// Whether this role may mutate site content.
    #[must_use]
    pub fn can_manage_content(self) -> bool {
        self == Self::Admin
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }
}

/// A known user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
}

impl User {
    #[must_use]
    pub fn new(id: UserId, role: Role) -> Self {
        Self {
            id,
            name: None,
            email: None,
            role,
        }
    }
}
