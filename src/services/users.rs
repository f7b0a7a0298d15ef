use crate::domain::user::User;
use crate::forms::users::{CreateUserForm, UserListParams};
use crate::pagination::Paginated;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult, authorize};

pub fn list_users<R>(repo: &R, params: UserListParams) -> ServiceResult<Paginated<User>>
where
    R: UserReader + ?Sized,
{
    let pagination = params.pagination();
    let query = params
        .into_query()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let (total, items) = repo.list_users(query).map_err(ServiceError::from)?;

    Ok(Paginated::new(items, &pagination, total))
}

pub fn get_user<R>(repo: &R, user_id: i32) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    repo.get_user_by_id(user_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn get_user_by_username<R>(repo: &R, username: &str) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    repo.get_user_by_username(username.trim())
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Registers a user; only catalog managers may do so.
pub fn create_user<R>(repo: &R, actor_id: i32, form: CreateUserForm) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    authorize(repo, actor_id)?;

    let new_user = form
        .into_new_user()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let user = repo.create_user(&new_user).map_err(ServiceError::from)?;

    log::info!("User `{}` created with role {}", user.username, user.role);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserRole;
    use crate::repository::RepositoryError;
    use crate::services::test_support::{MockRepo, sample_user};

    #[test]
    fn create_user_by_admin() {
        let mut repo = MockRepo::with_admin();
        repo.user_writer
            .expect_create_user()
            .times(1)
            .returning(|new_user| {
                assert_eq!(new_user.role, UserRole::User);
                let mut user = sample_user(12, new_user.role);
                user.username = new_user.username.clone();
                Ok(user)
            });

        let form = CreateUserForm {
            username: "jane".to_string(),
            name: "Jane".to_string(),
            role: None,
        };

        let user = create_user(&repo, 1, form).expect("created");
        assert_eq!(user.username, "jane");
    }

    #[test]
    fn duplicate_username_is_a_conflict() {
        let mut repo = MockRepo::with_admin();
        repo.user_writer.expect_create_user().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed: users.username".to_string(),
            ))
        });

        let form = CreateUserForm {
            username: "jane".to_string(),
            name: "Jane".to_string(),
            role: Some("ADMIN".to_string()),
        };

        assert!(matches!(
            create_user(&repo, 1, form),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn list_users_rejects_unknown_role_filter() {
        let mut repo = MockRepo::new();
        repo.users.expect_list_users().never();

        let params = UserListParams {
            role: Some("OWNER".to_string()),
            ..UserListParams::default()
        };

        assert!(matches!(list_users(&repo, params), Err(ServiceError::Form(_))));
    }
}
