use diesel::prelude::*;

use crate::{
    domain::user::{NewUser as DomainNewUser, User as DomainUser, UserListQuery, UserRole},
    models::user::{NewUser as DbNewUser, User as DbUser},
    repository::{DieselRepository, RepositoryError, RepositoryResult, UserReader, UserWriter},
};

/// Display name given to a freshly seeded system user.
const SYSTEM_USER_NAME: &str = "System";

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .find(id)
            .first::<DbUser>(&mut conn)
            .optional()?;

        user.map(DomainUser::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<DomainUser>> {
        let mut conn = self.conn()?;
        find_by_username(&mut conn, username)
    }

    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<DomainUser>)> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let build = || {
            let mut items = users::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(term) = query.search.as_ref() {
                let pattern = format!("%{}%", term);
                items = items.filter(
                    users::username
                        .like(pattern.clone())
                        .or(users::name.like(pattern)),
                );
            }

            if let Some(role) = query.role {
                items = items.filter(users::role.eq(role.as_str()));
            }

            items
        };

        let total = build().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = build().order(users::username.asc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let users = items
            .load::<DbUser>(&mut conn)?
            .into_iter()
            .map(DomainUser::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, users))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &DomainNewUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let insertable = DbNewUser::from(new_user);

        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(DomainUser::try_from(created)?)
    }

    fn seed_system_user(&self, username: &str) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        conn.transaction::<DomainUser, RepositoryError, _>(|conn| {
            if let Some(existing) = find_by_username(conn, username)? {
                if existing.role != UserRole::System {
                    log::warn!(
                        "Seed user `{username}` already exists with role {}",
                        existing.role
                    );
                }
                return Ok(existing);
            }

            let new_user = DomainNewUser::new(username, SYSTEM_USER_NAME, UserRole::System);
            let created = diesel::insert_into(users::table)
                .values(&DbNewUser::from(&new_user))
                .get_result::<DbUser>(conn)?;

            log::info!("Created system user `{username}`");
            Ok(DomainUser::try_from(created)?)
        })
    }
}

fn find_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> RepositoryResult<Option<DomainUser>> {
    use crate::schema::users;

    let user = users::table
        .filter(users::username.eq(username))
        .first::<DbUser>(conn)
        .optional()?;

    user.map(DomainUser::try_from)
        .transpose()
        .map_err(RepositoryError::from)
}
