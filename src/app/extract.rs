use crate::domain::model::PersonInput;
use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

/// Create-person body, accepted as JSON or URL-encoded form.
///
/// Non-object JSON, any other content type, or no body yields an empty input.
#[derive(Debug, Clone, Default)]
pub struct PersonBody(pub PersonInput);

impl<S> FromRequest<S> for PersonBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(body) = Json::<Value>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(
                body.as_object()
                    .map(PersonInput::from_object)
                    .unwrap_or_default(),
            ))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(PersonInput::from_object(&form_fields(pairs))))
        } else {
            tracing::debug!("Unparsed create body (content-type: {:?})", content_type);
            Ok(Self::default())
        }
    }
}

/// Folds form pairs into fields; a repeated key becomes an array of its values.
pub fn form_fields(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut fields = Map::new();
    for (key, value) in pairs {
        match fields.get_mut(&key) {
            Some(Value::Array(values)) => values.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                fields.insert(key, Value::String(value));
            }
        }
    }
    fields
}
