//! Tests for the domain user model.

use super::*;
use rstest::rstest;
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[rstest]
fn user_id_parses_uuid() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(id.to_string(), VALID_ID);
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_bad_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
#[case("Alice")]
#[case("  padded  ")]
#[case("名前")]
fn user_name_keeps_value_verbatim(#[case] raw: &str) {
    let name = UserName::new(raw).expect("valid name");
    assert_eq!(name.as_str(), raw);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn user_name_rejects_blank(#[case] raw: &str) {
    assert_eq!(UserName::new(raw), Err(UserValidationError::EmptyName));
}

#[rstest]
#[case("alice@example.com")]
#[case("first.last+tag@sub.example.co.uk")]
#[case("user@localhost")]
#[case("o'brien@example.ie")]
#[case("jose@bücher.de")]
#[case("björn@example.se")]
#[case("a!#$%&'*+/=?^_`{|}~-z@example.com")]
fn email_accepts_valid_addresses(#[case] raw: &str) {
    let email = EmailAddress::new(raw).expect("valid email");
    assert_eq!(email.as_str(), raw);
}

#[rstest]
#[case("not-an-email")]
#[case("bad-email")]
#[case("@example.com")]
#[case("alice@")]
#[case("alice@@example.com")]
#[case("alice example@example.com")]
#[case(" alice@example.com")]
#[case(".alice@example.com")]
#[case("alice..b@example.com")]
#[case("alice@-example.com")]
#[case("alice@example..com")]
#[case("a,b@example.com")]
#[case("<a>@example.com")]
#[case("(alice)@example.com")]
#[case("\"alice\"@example.com")]
#[case("alice;bob@example.com")]
#[case("alice\\bob@example.com")]
#[case("ali\u{7}ce@example.com")]
fn email_rejects_malformed_addresses(#[case] raw: &str) {
    assert_eq!(
        EmailAddress::new(raw),
        Err(UserValidationError::InvalidEmail)
    );
}

#[rstest]
fn email_reports_blank_as_empty() {
    assert_eq!(EmailAddress::new(" "), Err(UserValidationError::EmptyEmail));
}

#[rstest]
fn password_rejects_blank_but_allows_short() {
    assert_eq!(Password::new(""), Err(UserValidationError::EmptyPassword));
    assert_eq!(Password::new("x").expect("short password").as_str(), "x");
}

#[rstest]
fn password_debug_is_redacted() {
    let password = Password::new("secret123").expect("valid password");
    let rendered = format!("{password:?}");
    assert!(!rendered.contains("secret123"));
}

#[rstest]
fn new_user_serialises_fields_as_plain_strings() {
    let new_user = NewUser::try_from_strings("Alice", "alice@example.com", "secret123")
        .expect("valid user");
    let value = serde_json::to_value(&new_user).expect("serialise new user");
    assert_eq!(
        value,
        json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "secret123",
        })
    );
}

#[rstest]
fn new_user_deserialisation_enforces_rules() {
    let result: Result<NewUser, _> = serde_json::from_value(json!({
        "name": "Bob",
        "email": "bad-email",
        "password": "x",
    }));
    assert!(result.is_err());
}

#[rstest]
fn user_from_new_keeps_fields() {
    let new_user = NewUser::try_from_strings("Alice", "alice@example.com", "secret123")
        .expect("valid user");
    let id = UserId::new(VALID_ID).expect("valid id");
    let created_at = Utc::now();

    let user = User::from_new(id.clone(), created_at, new_user);

    assert_eq!(user.id(), &id);
    assert_eq!(user.name().as_str(), "Alice");
    assert_eq!(user.email().as_str(), "alice@example.com");
    assert_eq!(user.password().as_str(), "secret123");
    assert_eq!(user.created_at(), created_at);
}
