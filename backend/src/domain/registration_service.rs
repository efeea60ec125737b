//! Registration service implementing the [`RegistrationCommand`] port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{
    RegistrationCommand, RegistrationEcho, UserPersistenceError, UserRepository,
};
use crate::domain::{Error, RegistrationForm, validate_registration};

/// Validates submissions and persists them through a [`UserRepository`].
#[derive(Clone)]
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
}

impl RegistrationService {
    /// Build the service around an injected repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

/// Client-facing message for an unreachable user store.
pub const STORE_UNAVAILABLE_MESSAGE: &str = "The user store is temporarily unavailable.";

fn map_persistence_error(err: UserPersistenceError) -> Error {
    error!(error = %err, "user persistence failed");
    match err {
        UserPersistenceError::Connection { .. } => {
            Error::service_unavailable(STORE_UNAVAILABLE_MESSAGE)
        }
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl RegistrationCommand for RegistrationService {
    async fn register(&self, form: RegistrationForm) -> Result<RegistrationEcho, Error> {
        let new_user = validate_registration(form).map_err(|errors| {
            let violations: Vec<String> = errors
                .as_slice()
                .iter()
                .map(|failure| format!("{}:{}", failure.field(), failure.rule().as_str()))
                .collect();
            warn!(?violations, "registration rejected by validation");
            Error::from(errors)
        })?;

        let user = self
            .users
            .create_user(&new_user)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id(), "user registered");

        Ok(RegistrationEcho::from(new_user))
    }
}
