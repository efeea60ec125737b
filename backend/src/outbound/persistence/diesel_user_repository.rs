//! PostgreSQL-backed [`UserRepository`] using Diesel.
//!
//! Identifiers and creation timestamps are assigned by column defaults and
//! read back with `RETURNING`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed user repository.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::query("user record conflicts with an existing row")
        }
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        _ => UserPersistenceError::query("database error"),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow {
        id,
        name,
        email,
        password,
        created_at,
    } = row;
    let new_user = NewUser::try_from_strings(name, email, password).map_err(|err| {
        UserPersistenceError::query(format!("stored user {id} is invalid: {err}"))
    })?;
    Ok(User::from_new(UserId::from(id), created_at, new_user))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await?;
        let row = NewUserRow {
            name: user.name().as_str(),
            email: user.email().as_str(),
            password: user.password().as_str(),
        };

        let stored = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_user(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;
    use uuid::Uuid;

    struct StubInfo;

    impl DatabaseErrorInformation for StubInfo {
        fn message(&self) -> &str {
            "stub"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(StubInfo))
    }

    #[rstest]
    #[case(database_error(DatabaseErrorKind::ClosedConnection), true)]
    #[case(database_error(DatabaseErrorKind::UniqueViolation), false)]
    #[case(database_error(DatabaseErrorKind::CheckViolation), false)]
    #[case(DieselError::NotFound, false)]
    fn diesel_errors_map_by_kind(#[case] error: DieselError, #[case] is_connection: bool) {
        let mapped = map_diesel_error(error);
        assert_eq!(
            matches!(mapped, UserPersistenceError::Connection { .. }),
            is_connection
        );
    }

    #[rstest]
    fn row_to_user_keeps_stored_values() {
        let id = Uuid::new_v4();
        let created_at = Utc::now();
        let user = row_to_user(UserRow {
            id,
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password: "secret123".to_owned(),
            created_at,
        })
        .expect("valid row");

        assert_eq!(user.id().as_uuid(), &id);
        assert_eq!(user.email().as_str(), "alice@example.com");
        assert_eq!(user.created_at(), created_at);
    }

    #[rstest]
    fn row_to_user_rejects_corrupt_rows() {
        let err = row_to_user(UserRow {
            id: Uuid::new_v4(),
            name: String::new(),
            email: "alice@example.com".to_owned(),
            password: "secret123".to_owned(),
            created_at: Utc::now(),
        })
        .expect_err("blank name must be rejected");

        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
