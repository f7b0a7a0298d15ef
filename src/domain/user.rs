use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pagination::Pagination;

/// Raised when a role name is not one of the recognised roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid role `{0}`; valid roles are SYSTEM, ADMIN, USER")]
pub struct InvalidRole(pub String);

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    System,
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::System => "SYSTEM",
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
        }
    }

    /// Whether the role may create, change or delete catalog records.
    pub fn can_manage_catalog(&self) -> bool {
        matches!(self, UserRole::System | UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = InvalidRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SYSTEM" => Ok(UserRole::System),
            "ADMIN" => Ok(UserRole::Admin),
            "USER" => Ok(UserRole::User),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

/// Account referenced by the audit columns of catalog records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier of the user.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Human-readable name of the user.
    pub name: String,
    /// Role that decides what the user may change.
    pub role: UserRole,
    /// Timestamp for when the user record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the user record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub role: UserRole,
}

impl NewUser {
    pub fn new(username: impl Into<String>, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            role,
        }
    }
}

/// Query definition used to list users.
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    /// Optional search applied to username and name.
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}
