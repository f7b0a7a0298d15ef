//! Use cases called by the HTTP handlers.
//!
//! Each function takes the repository as a generic `R: Trait + ?Sized` so the
//! handlers pass `DieselRepository` and the tests pass mocks.

use crate::domain::user::User;
use crate::repository::UserReader;

pub mod attribute_values;
pub mod attributes;
pub mod categories;
pub mod errors;
pub mod images;
pub mod products;
pub mod skus;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::{ServiceError, ServiceResult};

/// Resolve the acting user and check that it may change the catalog.
pub fn authorize<R>(repo: &R, actor_id: i32) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    let user = repo
        .get_user_by_id(actor_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::Unauthorized)?;

    if !user.role.can_manage_catalog() {
        log::warn!(
            "User {} with role {} tried to change the catalog",
            user.username,
            user.role
        );
        return Err(ServiceError::Unauthorized);
    }

    Ok(user)
}
