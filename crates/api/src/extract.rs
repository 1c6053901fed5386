//! Request body extractor that deserializes and validates in one step.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use talentdesk_core::error::CoreError;
use talentdesk_core::validation::describe_errors;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has passed its `validator` rules.
///
/// Malformed JSON is rejected with 400 `BAD_REQUEST`; rule violations with
/// 400 `VALIDATION_ERROR`. Must be the last extractor of a handler.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            AppError::Core(CoreError::Validation(describe_errors(&errors)))
        })?;

        Ok(ValidatedJson(value))
    }
}

/// `deserialize_with` target that strips surrounding whitespace, so the
/// `validator` rules see the value that will be stored.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| s.trim().to_string())
}

/// Optional variant of [`trimmed`]; pair it with `#[serde(default)]`.
pub fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|v| v.map(|s| s.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use talentdesk_core::validation::validate_letters_and_spaces;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct NameBody {
        #[serde(deserialize_with = "trimmed")]
        #[validate(length(min = 3, max = 50), custom(function = "validate_letters_and_spaces"))]
        name: String,
        #[serde(default, deserialize_with = "trimmed_opt")]
        note: Option<String>,
    }

    async fn extract(json: &str) -> Result<NameBody, AppError> {
        let req = axum::http::Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap();
        ValidatedJson::<NameBody>::from_request(req, &())
            .await
            .map(|ValidatedJson(body)| body)
    }

    #[tokio::test]
    async fn surrounding_whitespace_is_stripped() {
        let body = extract(r#"{"name":"  Legal ","note":" hi "}"#).await.unwrap();
        assert_eq!(body.name, "Legal");
        assert_eq!(body.note.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn missing_optional_field_stays_none() {
        let body = extract(r#"{"name":"Legal"}"#).await.unwrap();
        assert_eq!(body.note, None);
    }

    #[tokio::test]
    async fn rules_apply_to_the_trimmed_value() {
        assert_matches!(
            extract(r#"{"name":"   "}"#).await,
            Err(AppError::Core(CoreError::Validation(msg))) if msg.starts_with("name: ")
        );
        assert_matches!(
            extract(r#"{"name":"  HR  "}"#).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        assert_matches!(extract(r#"{"name":"#).await, Err(AppError::BadRequest(_)));
    }
}
