//! Registration input and its validation.
//!
//! [`validate_registration`] is the single gate between raw submitted data and
//! a [`NewUser`]. Every field is checked and all failures are reported
//! together, one [`FieldError`] per violated rule.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::json;

use super::{EmailAddress, Error, NewUser, Password, UserName, UserValidationError};

/// A single submitted field before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldInput {
    /// The field was absent, explicitly null, or an empty list.
    #[default]
    Missing,
    /// The field carried a string.
    Text(String),
    /// The field carried a number, boolean, array, or object.
    NonText,
}

impl FieldInput {
    /// Wrap an optional string, treating `None` as missing.
    pub fn from_option(value: Option<String>) -> Self {
        value.map_or(Self::Missing, Self::Text)
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Raw registration submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: FieldInput,
    pub email: FieldInput,
    pub password: FieldInput,
}

/// Registration fields, in the order they are validated and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrationField {
    Name,
    Email,
    Password,
}

impl RegistrationField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation rule a field can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRule {
    /// Present, non-null, and not blank.
    Required,
    /// A string value.
    String,
    /// A syntactically valid email address.
    Email,
}

impl FieldRule {
    /// Stable rule identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::String => "string",
            Self::Email => "email",
        }
    }
}

/// A (field, violated rule) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    field: RegistrationField,
    rule: FieldRule,
}

impl FieldError {
    pub fn new(field: RegistrationField, rule: FieldRule) -> Self {
        Self { field, rule }
    }

    pub fn field(&self) -> RegistrationField {
        self.field
    }

    pub fn rule(&self) -> FieldRule {
        self.rule
    }

    /// Human-readable description of the violation.
    pub fn message(&self) -> String {
        let field = self.field.as_str();
        match self.rule {
            FieldRule::Required => format!("The {field} field is required."),
            FieldRule::String => format!("The {field} field must be a string."),
            FieldRule::Email => format!("The {field} field must be a valid email address."),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Non-empty list of field errors from one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// False for every value produced by [`validate_registration`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `field` violated `rule`.
    pub fn contains(&self, field: RegistrationField, rule: FieldRule) -> bool {
        self.0.contains(&FieldError::new(field, rule))
    }

    /// Messages grouped by field wire name.
    pub fn messages_by_field(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut grouped: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for error in &self.0 {
            grouped
                .entry(error.field.as_str())
                .or_default()
                .push(error.message());
        }
        grouped
    }

    /// First message, with a count of the remaining ones.
    ///
    /// # Examples
    /// ```
    /// use signup::domain::{validate_registration, RegistrationForm};
    ///
    /// let errors = validate_registration(RegistrationForm::default()).unwrap_err();
    /// assert_eq!(errors.summary(), "The name field is required. (and 2 more errors)");
    /// ```
    pub fn summary(&self) -> String {
        let first = self.0.first().map(FieldError::message).unwrap_or_default();
        match self.0.len() {
            0 | 1 => first,
            2 => format!("{first} (and 1 more error)"),
            n => format!("{first} (and {} more errors)", n - 1),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for Error {
    fn from(value: ValidationErrors) -> Self {
        Error::validation_failed(value.summary())
            .with_details(json!({ "errors": value.messages_by_field() }))
    }
}

fn check_text<T>(
    field: RegistrationField,
    input: FieldInput,
    type_rule: FieldRule,
    build: impl FnOnce(String) -> Result<T, UserValidationError>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let text = match input {
        FieldInput::Missing => {
            errors.push(FieldError::new(field, FieldRule::Required));
            return None;
        }
        FieldInput::NonText => {
            errors.push(FieldError::new(field, type_rule));
            return None;
        }
        FieldInput::Text(text) => text,
    };

    match build(text) {
        Ok(value) => Some(value),
        Err(
            UserValidationError::EmptyName
            | UserValidationError::EmptyEmail
            | UserValidationError::EmptyPassword,
        ) => {
            errors.push(FieldError::new(field, FieldRule::Required));
            None
        }
        Err(_) => {
            errors.push(FieldError::new(field, type_rule));
            None
        }
    }
}

/// Validate a submission, producing a [`NewUser`] or every violated rule.
///
/// Rules: `name` is required text, `email` is a required email address,
/// `password` is required text. A field failing `required` is not checked
/// further.
///
/// # Examples
/// ```
/// use signup::domain::{validate_registration, FieldInput, RegistrationForm};
///
/// let form = RegistrationForm {
///     name: FieldInput::from("Alice"),
///     email: FieldInput::from("alice@example.com"),
///     password: FieldInput::from("secret123"),
/// };
/// let new_user = validate_registration(form).expect("valid submission");
/// assert_eq!(new_user.name().as_str(), "Alice");
/// ```
pub fn validate_registration(form: RegistrationForm) -> Result<NewUser, ValidationErrors> {
    let RegistrationForm {
        name,
        email,
        password,
    } = form;
    let mut errors = Vec::new();

    let name = check_text(
        RegistrationField::Name,
        name,
        FieldRule::String,
        UserName::new,
        &mut errors,
    );
    let email = check_text(
        RegistrationField::Email,
        email,
        FieldRule::Email,
        EmailAddress::new,
        &mut errors,
    );
    let password = check_text(
        RegistrationField::Password,
        password,
        FieldRule::String,
        Password::new,
        &mut errors,
    );

    if let (Some(name), Some(email), Some(password)) = (name, email, password) {
        return Ok(NewUser::new(name, email, password));
    }
    Err(ValidationErrors(errors))
}

#[cfg(test)]
mod tests;
