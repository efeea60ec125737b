//! Driving port for the registration use-case.
//!
//! HTTP handlers call this port with the raw submission; validation,
//! persistence, and error mapping stay behind it.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{EmailAddress, Error, NewUser, Password, RegistrationForm, UserName};

/// Fields of an accepted registration, echoed back to the caller.
///
/// The password is included verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationEcho {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: Password,
}

impl From<NewUser> for RegistrationEcho {
    fn from(value: NewUser) -> Self {
        Self {
            name: value.name().clone(),
            email: value.email().clone(),
            password: value.password().clone(),
        }
    }
}

/// Domain use-case port for registering users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationCommand: Send + Sync {
    /// Validate `form`, persist the user, and echo the accepted fields.
    ///
    /// Validation failures surface as [`crate::domain::ErrorCode::ValidationFailed`];
    /// nothing is persisted in that case.
    async fn register(&self, form: RegistrationForm) -> Result<RegistrationEcho, Error>;
}
