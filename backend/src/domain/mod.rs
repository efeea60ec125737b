//! Domain primitives, validation, and use-cases.
//!
//! Purpose: define the user registration model independent of HTTP and
//! storage. Inbound adapters call the [`ports::RegistrationCommand`] port;
//! outbound adapters implement [`ports::UserRepository`].
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - TraceId — request correlation identifier.
//! - User, NewUser and field newtypes — the registered user.
//! - validate_registration — the explicit validation gate.
//! - RegistrationService — the registration use-case.

pub mod error;
pub mod ports;
pub mod registration;
pub mod registration_service;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::registration::{
    FieldError, FieldInput, FieldRule, RegistrationField, RegistrationForm, ValidationErrors,
    validate_registration,
};
pub use self::registration_service::RegistrationService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EmailAddress, NewUser, Password, User, UserId, UserName, UserValidationError,
};
