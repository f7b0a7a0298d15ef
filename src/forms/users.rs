use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::user::{InvalidRole, NewUser, UserListQuery, UserRole};
use crate::forms::sanitize_inline_text;
use crate::pagination::{PageParams, Pagination};

const USERNAME_MAX_LEN_VALIDATOR: u64 = 50;
const NAME_MAX_LEN_VALIDATOR: u64 = 50;

pub type UserFormResult<T> = Result<T, UserFormError>;

#[derive(Debug, Error)]
pub enum UserFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("invalid username `{0}`")]
    InvalidUsername(String),
    #[error("user name cannot be empty")]
    EmptyName,
    #[error(transparent)]
    Role(#[from] InvalidRole),
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserForm {
    #[validate(length(min = 1, max = USERNAME_MAX_LEN_VALIDATOR))]
    pub username: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// `SYSTEM`, `ADMIN` or `USER`; defaults to `USER`.
    #[serde(default)]
    pub role: Option<String>,
}

impl CreateUserForm {
    pub fn into_new_user(self) -> UserFormResult<NewUser> {
        self.validate()?;

        let username = self.username.trim().to_string();
        if username.is_empty() || username.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
            return Err(UserFormError::InvalidUsername(username));
        }
        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(UserFormError::EmptyName);
        }
        let role = match self.role.as_deref().map(str::trim) {
            Some(role) => role.parse::<UserRole>()?,
            None => UserRole::User,
        };

        Ok(NewUser::new(username, name, role))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UserListParams {
    pub search: Option<String>,
    pub role: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl UserListParams {
    pub fn pagination(&self) -> Pagination {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
        .normalize()
    }

    pub fn into_query(self) -> UserFormResult<UserListQuery> {
        let mut query = UserListQuery::new().paginate(self.pagination());

        if let Some(search) = self
            .search
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|search| !search.is_empty())
        {
            query = query.search(search);
        }
        if let Some(role) = self.role.as_deref() {
            query = query.role(role.trim().parse::<UserRole>()?);
        }

        Ok(query)
    }
}
