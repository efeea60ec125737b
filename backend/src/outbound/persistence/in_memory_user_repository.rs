//! Process-local [`UserRepository`] used when no database is configured.
//!
//! Records live only as long as the process and are lost on restart.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

/// In-memory user store backed by a mutex-guarded vector.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every stored user in insertion order.
    pub fn users(&self) -> Vec<User> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let stored = User::from_new(UserId::random(), Utc::now(), user.clone());
        self.lock().push(stored.clone());
        Ok(stored)
    }
}
