//! Request body extraction.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::{Form, Json};
use fruitstand_core::error::CoreError;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Request body decoded from JSON or from an urlencoded HTML form,
/// chosen by `Content-Type`.
///
/// A body that parses but has the wrong shape is reported as a validation
/// failure; a body that cannot be parsed at all is a bad request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(form_rejection)?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(json_rejection)?;
            Ok(Self(value))
        }
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            ApiError::Core(CoreError::Validation(err.body_text()))
        }
        other => ApiError::BadRequest(other.body_text()),
    }
}

fn form_rejection(rejection: FormRejection) -> ApiError {
    match rejection {
        FormRejection::FailedToDeserializeForm(err) => {
            ApiError::Core(CoreError::Validation(err.body_text()))
        }
        FormRejection::FailedToDeserializeFormBody(err) => {
            ApiError::Core(CoreError::Validation(err.body_text()))
        }
        other => ApiError::BadRequest(other.body_text()),
    }
}
