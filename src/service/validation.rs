//! Structural validation of request bodies: the payload must be a non-empty JSON object.

use crate::error::AppError;
use crate::model::AccountFields;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Turn an extracted body (or its rejection) into account fields.
    /// Missing, malformed, non-object, and empty-object bodies are invalid payloads;
    /// a body cut off by the size limit stays a 413.
    pub fn account_fields(
        body: Result<Json<Value>, JsonRejection>,
        context: &str,
    ) -> Result<AccountFields, AppError> {
        let Json(value) = body.map_err(|rejection| {
            tracing::warn!(%rejection, "rejected account payload");
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge
            } else {
                invalid(context)
            }
        })?;
        Self::object_body(value, context)
    }

    pub fn object_body(value: Value, context: &str) -> Result<AccountFields, AppError> {
        match value {
            Value::Object(m) if !m.is_empty() => Ok(m),
            other => {
                tracing::warn!(
                    kind = value_kind(&other),
                    "account payload is not a non-empty object"
                );
                Err(invalid(context))
            }
        }
    }
}

fn invalid(context: &str) -> AppError {
    AppError::InvalidPayload(format!("Invalid account data provided{}", context))
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "empty object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_objects() {
        let fields = RequestValidator::object_body(json!({"name": "John Doe"}), "").unwrap();
        assert_eq!(fields.get("name"), Some(&json!("John Doe")));
    }

    #[test]
    fn rejects_non_objects() {
        for v in [json!(null), json!([1, 2]), json!("name"), json!(3), json!(true), json!({})] {
            let err = RequestValidator::object_body(v, "").unwrap_err();
            assert!(matches!(err, AppError::InvalidPayload(_)));
        }
    }

    #[test]
    fn context_is_appended() {
        let err = RequestValidator::object_body(json!([]), " for update").unwrap_err();
        assert_eq!(err.to_string(), "Invalid account data provided for update");
    }
}
