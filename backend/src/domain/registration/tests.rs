//! Tests for registration validation.

use super::*;
use crate::domain::ErrorCode;
use rstest::{fixture, rstest};

fn sample_form() -> RegistrationForm {
    RegistrationForm {
        name: FieldInput::from("Alice"),
        email: FieldInput::from("alice@example.com"),
        password: FieldInput::from("secret123"),
    }
}

#[fixture]
fn valid_form() -> RegistrationForm {
    sample_form()
}

#[rstest]
fn accepts_valid_submission(valid_form: RegistrationForm) {
    let new_user = validate_registration(valid_form).expect("valid submission");
    assert_eq!(new_user.name().as_str(), "Alice");
    assert_eq!(new_user.email().as_str(), "alice@example.com");
    assert_eq!(new_user.password().as_str(), "secret123");
}

#[rstest]
#[case::missing_name(RegistrationField::Name, FieldInput::Missing, FieldRule::Required)]
#[case::empty_name(RegistrationField::Name, FieldInput::from(""), FieldRule::Required)]
#[case::blank_name(RegistrationField::Name, FieldInput::from("   "), FieldRule::Required)]
#[case::numeric_name(RegistrationField::Name, FieldInput::NonText, FieldRule::String)]
#[case::missing_email(RegistrationField::Email, FieldInput::Missing, FieldRule::Required)]
#[case::malformed_email(
    RegistrationField::Email,
    FieldInput::from("not-an-email"),
    FieldRule::Email
)]
#[case::numeric_email(RegistrationField::Email, FieldInput::NonText, FieldRule::Email)]
#[case::missing_password(
    RegistrationField::Password,
    FieldInput::Missing,
    FieldRule::Required
)]
#[case::array_password(RegistrationField::Password, FieldInput::NonText, FieldRule::String)]
fn reports_single_field_failure(
    mut valid_form: RegistrationForm,
    #[case] field: RegistrationField,
    #[case] input: FieldInput,
    #[case] rule: FieldRule,
) {
    match field {
        RegistrationField::Name => valid_form.name = input,
        RegistrationField::Email => valid_form.email = input,
        RegistrationField::Password => valid_form.password = input,
    }

    let errors = validate_registration(valid_form).expect_err("submission must fail");

    assert_eq!(errors.as_slice(), &[FieldError::new(field, rule)]);
}

#[rstest]
fn reports_every_failing_field_in_order() {
    let form = RegistrationForm {
        name: FieldInput::Missing,
        email: FieldInput::from("bad-email"),
        password: FieldInput::from(""),
    };

    let errors = validate_registration(form).expect_err("submission must fail");

    assert_eq!(
        errors.as_slice(),
        &[
            FieldError::new(RegistrationField::Name, FieldRule::Required),
            FieldError::new(RegistrationField::Email, FieldRule::Email),
            FieldError::new(RegistrationField::Password, FieldRule::Required),
        ]
    );
    assert_eq!(errors.len(), 3);
    assert!(!errors.is_empty());
    assert!(errors.contains(RegistrationField::Name, FieldRule::Required));
    assert!(!errors.contains(RegistrationField::Name, FieldRule::String));
}

#[rstest]
fn field_errors_expose_field_and_rule() {
    let errors = validate_registration(RegistrationForm {
        password: FieldInput::NonText,
        ..sample_form()
    })
    .expect_err("non-text password");

    let [only] = errors.as_slice() else {
        panic!("expected one failure, got {errors:?}");
    };
    assert_eq!(only.field(), RegistrationField::Password);
    assert_eq!(only.rule(), FieldRule::String);
    assert_eq!(only.rule().as_str(), "string");
    assert_eq!(only.field().to_string(), "password");
}

#[rstest]
fn required_short_circuits_other_rules() {
    let form = RegistrationForm {
        email: FieldInput::from("  "),
        ..sample_form()
    };

    let errors = validate_registration(form).expect_err("submission must fail");

    assert!(errors.contains(RegistrationField::Email, FieldRule::Required));
    assert!(!errors.contains(RegistrationField::Email, FieldRule::Email));
}

#[rstest]
#[case(FieldError::new(RegistrationField::Name, FieldRule::Required), "The name field is required.")]
#[case(FieldError::new(RegistrationField::Password, FieldRule::String), "The password field must be a string.")]
#[case(FieldError::new(RegistrationField::Email, FieldRule::Email), "The email field must be a valid email address.")]
fn messages_name_field_and_rule(#[case] error: FieldError, #[case] expected: &str) {
    assert_eq!(error.message(), expected);
    assert_eq!(error.to_string(), expected);
}

#[rstest]
fn summary_counts_remaining_errors() {
    let one = validate_registration(RegistrationForm {
        name: FieldInput::from(""),
        ..sample_form()
    })
    .expect_err("one error");
    let two = validate_registration(RegistrationForm {
        name: FieldInput::from(""),
        password: FieldInput::Missing,
        ..sample_form()
    })
    .expect_err("two errors");

    assert_eq!(one.summary(), "The name field is required.");
    assert_eq!(
        two.summary(),
        "The name field is required. (and 1 more error)"
    );
}

#[rstest]
fn converts_into_validation_failed_error_with_field_map() {
    let errors = validate_registration(RegistrationForm {
        name: FieldInput::from("Bob"),
        email: FieldInput::from("bad-email"),
        password: FieldInput::from("x"),
    })
    .expect_err("invalid email");

    let error = Error::from(errors);

    assert_eq!(error.code(), ErrorCode::ValidationFailed);
    assert_eq!(
        error.message(),
        "The email field must be a valid email address."
    );
    assert_eq!(
        error.details(),
        Some(&json!({
            "errors": { "email": ["The email field must be a valid email address."] }
        }))
    );
}

#[rstest]
fn field_input_from_option_maps_none_to_missing() {
    assert_eq!(FieldInput::from_option(None), FieldInput::Missing);
    assert_eq!(
        FieldInput::from_option(Some("x".to_owned())),
        FieldInput::Text("x".to_owned())
    );
}
