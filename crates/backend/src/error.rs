//! Backend error taxonomy and decoding of error response bodies.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by backend gateways.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend rejected the request with per-field messages.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// The backend sent an error with a human-readable message.
    #[error("{0}")]
    Message(String),

    #[error("not found")]
    NotFound,

    #[error("not authorized")]
    Unauthorized,

    #[error("request failed with status {0}")]
    Status(u16),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// Build a validation error from `(field, messages)` pairs.
    #[must_use]
    pub fn validation<I, F, M>(fields: I) -> Self
    where
        I: IntoIterator<Item = (F, Vec<M>)>,
        F: Into<String>,
        M: Into<String>,
    {
        ApiError::Validation(FieldErrors::from_pairs(fields))
    }

    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation(fields) => Some(fields),
            _ => None,
        }
    }
}

//
// ─── FIELD ERRORS ──────────────────────────────────────────────────────────────
//

/// Field-keyed validation messages, in the order the backend sent them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    fields: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    #[must_use]
    pub fn from_pairs<I, F, M>(fields: I) -> Self
    where
        I: IntoIterator<Item = (F, Vec<M>)>,
        F: Into<String>,
        M: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(field, messages)| {
                    (field.into(), messages.into_iter().map(Into::into).collect())
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|(_, messages)| messages.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Every message of every field, flattened in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.messages().collect::<Vec<_>>().join("; ");
        f.write_str(&joined)
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldErrorsVisitor;

        impl<'de> Visitor<'de> for FieldErrorsVisitor {
            type Value = FieldErrors;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to messages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FieldErrors, A::Error> {
                let mut fields = Vec::new();
                while let Some((field, value)) = map.next_entry::<String, Value>()? {
                    fields.push((field, messages_from_value(value)));
                }
                Ok(FieldErrors { fields })
            }
        }

        deserializer.deserialize_map(FieldErrorsVisitor)
    }
}

/// Array values contribute each element; any other value contributes itself.
fn messages_from_value(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.into_iter().filter_map(message_text).collect(),
        other => message_text(other).into_iter().collect(),
    }
}

fn message_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

//
// ─── RESPONSE BODIES ───────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<MessageField>,
    #[serde(default)]
    errors: Option<FieldErrors>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MessageField {
    Text(String),
    Structured {
        errors: FieldErrors,
        #[serde(default)]
        message: Option<String>,
    },
}

/// Map a non-success response to an `ApiError`.
///
/// Structured field errors win over a plain message, which wins over the
/// bare status code.
#[must_use]
pub fn decode_error(status: u16, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let mut fallback_message = None;

    if let Some(body) = parsed {
        match body.message {
            Some(MessageField::Structured { errors, message }) => {
                if !errors.is_empty() {
                    return ApiError::Validation(errors);
                }
                fallback_message = message;
            }
            Some(MessageField::Text(text)) => fallback_message = Some(text),
            None => {}
        }
        if let Some(errors) = body.errors
            && !errors.is_empty()
        {
            return ApiError::Validation(errors);
        }
    }

    if let Some(message) = fallback_message.filter(|m| !m.trim().is_empty()) {
        return ApiError::Message(message);
    }

    match status {
        401 | 403 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        code => ApiError::Status(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_errors_keep_field_order_and_every_message() {
        let body = r#"{"message": {"errors": {"phone": ["Required", "Too short"], "email": ["Invalid"]}}}"#;
        let err = decode_error(422, body);
        let fields = err.field_errors().expect("validation error");
        let collected: Vec<_> = fields.iter().map(|(f, m)| (f, m.len())).collect();
        assert_eq!(collected, vec![("phone", 2), ("email", 1)]);
        assert_eq!(
            fields.messages().collect::<Vec<_>>(),
            vec!["Required", "Too short", "Invalid"]
        );
    }

    #[test]
    fn scalar_field_values_are_kept_raw() {
        let body = r#"{"message": {"errors": {"date": "Must be in the future", "count": 3}}}"#;
        let err = decode_error(422, body);
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.get("date"), Some(&["Must be in the future".to_owned()][..]));
        assert_eq!(fields.get("count"), Some(&["3".to_owned()][..]));
    }

    #[test]
    fn top_level_errors_are_recognized() {
        let body = r#"{"message": "The given data was invalid.", "errors": {"name": ["Taken"]}}"#;
        let err = decode_error(422, body);
        assert_eq!(err.field_errors().unwrap().get("name").unwrap(), ["Taken"]);
    }

    #[test]
    fn plain_message_becomes_message_error() {
        let err = decode_error(400, r#"{"message": "Trainer is not available"}"#);
        assert!(matches!(err, ApiError::Message(ref m) if m == "Trainer is not available"));
    }

    #[test]
    fn empty_error_map_falls_back_to_message_or_status() {
        let err = decode_error(422, r#"{"message": {"errors": {}, "message": "Bad input"}}"#);
        assert!(matches!(err, ApiError::Message(ref m) if m == "Bad input"));

        let err = decode_error(500, r#"{"message": {"errors": {}}}"#);
        assert!(matches!(err, ApiError::Status(500)));
    }

    #[test]
    fn unparseable_body_maps_status() {
        assert!(matches!(decode_error(404, "<html>"), ApiError::NotFound));
        assert!(matches!(decode_error(401, ""), ApiError::Unauthorized));
        assert!(matches!(decode_error(502, "oops"), ApiError::Status(502)));
    }
}
