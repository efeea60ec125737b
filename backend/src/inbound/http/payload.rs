//! Request body extraction for registration submissions.
//!
//! Bodies are decoded according to their `Content-Type`: JSON for
//! `application/json` (and `+json` suffixes), URL-encoded form data for
//! `application/x-www-form-urlencoded` or when no content type is sent. Any
//! other content type, or a body that does not decode in its declared
//! format, is rejected with `400 invalid_request` before validation. JSON
//! bodies must be objects.

use actix_web::http::header::CONTENT_TYPE;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use serde_json::{Map, Value, json};

use crate::domain::{Error, FieldInput, RegistrationForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyFormat {
    Json,
    Form,
}

impl BodyFormat {
    fn from_request(req: &HttpRequest) -> Result<Self, Error> {
        let Some(header) = req.headers().get(CONTENT_TYPE) else {
            return Ok(Self::Form);
        };
        let raw = header
            .to_str()
            .map_err(|_| Error::invalid_request("content type header is not valid ASCII"))?;
        let essence = raw
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "" | "application/x-www-form-urlencoded" => Ok(Self::Form),
            "application/json" => Ok(Self::Json),
            other if other.ends_with("+json") => Ok(Self::Json),
            other => Err(Error::invalid_request("unsupported content type")
                .with_details(json!({ "contentType": other }))),
        }
    }
}

fn json_field(value: Option<Value>) -> FieldInput {
    match value {
        None | Some(Value::Null) => FieldInput::Missing,
        Some(Value::Array(items)) if items.is_empty() => FieldInput::Missing,
        Some(Value::String(text)) => FieldInput::Text(text),
        Some(_) => FieldInput::NonText,
    }
}

/// Decode a JSON object body. Arrays and scalars are rejected.
fn decode_json(body: &[u8]) -> Result<RegistrationForm, Error> {
    let mut fields: Map<String, Value> = serde_json::from_slice(body).map_err(|err| {
        Error::invalid_request("request body is not a valid JSON object")
            .with_details(json!({ "reason": err.to_string() }))
    })?;
    Ok(RegistrationForm {
        name: json_field(fields.remove("name")),
        email: json_field(fields.remove("email")),
        password: json_field(fields.remove("password")),
    })
}

/// Split `name[]` or `name[key]` into its base name and whether it was
/// bracketed.
fn form_key(raw: &str) -> (&str, bool) {
    match raw.split_once('[') {
        Some((base, _)) => (base, true),
        None => (raw, false),
    }
}

/// Decode a form body.
///
/// A repeated key keeps its last value. Bracketed keys build a list, which
/// is reported as non-text.
fn decode_form(body: &[u8]) -> Result<RegistrationForm, Error> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body).map_err(|err| {
        Error::invalid_request("request body is not valid form data")
            .with_details(json!({ "reason": err.to_string() }))
    })?;

    let mut form = RegistrationForm::default();
    for (key, value) in pairs {
        let (name, bracketed) = form_key(&key);
        let slot = match name {
            "name" => &mut form.name,
            "email" => &mut form.email,
            "password" => &mut form.password,
            _ => continue,
        };
        *slot = if bracketed {
            FieldInput::NonText
        } else {
            FieldInput::Text(value)
        };
    }
    Ok(form)
}

fn decode(format: BodyFormat, body: &[u8]) -> Result<RegistrationForm, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RegistrationForm::default());
    }
    match format {
        BodyFormat::Json => decode_json(body),
        BodyFormat::Form => decode_form(body),
    }
}

/// Registration submission decoded from the request body.
///
/// Decoding only classifies each field as missing, text, or non-text; the
/// rules themselves are applied by the registration use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPayload(RegistrationForm);

impl RegistrationPayload {
    pub fn into_inner(self) -> RegistrationForm {
        self.0
    }
}

impl FromRequest for RegistrationPayload {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let format = BodyFormat::from_request(req);
        let body = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let format = format?;
            let bytes = body.await.map_err(|err| {
                Error::invalid_request("failed to read request body")
                    .with_details(json!({ "reason": err.to_string() }))
            })?;
            decode(format, &bytes).map(Self)
        })
    }
}
