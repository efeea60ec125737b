//! Driven port for user persistence.
//!
//! The store assigns identifiers; callers only ever hand over a validated
//! [`NewUser`].

use async_trait::async_trait;

use crate::domain::{NewUser, User};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// The store could not be reached.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// The store was reached but the write failed.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for creating user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored record with its identifier.
    ///
    /// No uniqueness is enforced; submitting the same data twice creates two
    /// records.
    async fn create_user(&self, user: &NewUser) -> Result<User, UserPersistenceError>;
}
