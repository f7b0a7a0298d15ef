use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::{InvalidRole, NewUser as DomainNewUser, User as DomainUser, UserRole};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub name: &'a str,
    pub role: &'static str,
}

impl TryFrom<User> for DomainUser {
    type Error = InvalidRole;

    fn try_from(value: User) -> Result<Self, Self::Error> {
        let role = value.role.parse::<UserRole>()?;

        Ok(Self {
            id: value.id,
            username: value.username,
            name: value.name,
            role,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(value: &'a DomainNewUser) -> Self {
        Self {
            username: value.username.as_str(),
            name: value.name.as_str(),
            role: value.role.as_str(),
        }
    }
}
