//! Ports between the registration use-case and its adapters.
//!
//! [`RegistrationCommand`] is the driving port called by HTTP handlers;
//! [`UserRepository`] is the driven port implemented by persistence.

mod registration_command;
mod user_repository;

#[cfg(test)]
pub use registration_command::MockRegistrationCommand;
pub use registration_command::{RegistrationCommand, RegistrationEcho};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
