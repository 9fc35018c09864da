use axum::{
    Json,
    extract::{
        FromRequest, Request,
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recipe_forge_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

const UPSTREAM_MESSAGE: &str = "The recipe provider failed to answer, please try again";
const BUSY_MESSAGE: &str = "The recipe provider is busy, please try again later";
const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        Self::Validation {
            message: format!("Invalid {}", field),
            errors: vec![FieldError {
                field,
                message: message.into(),
            }],
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "E_VALIDATION",
            Self::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
            Self::BadGateway(_) => "E_UPSTREAM",
            Self::ServiceUnavailable(_) => "E_UPSTREAM_UNAVAILABLE",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation { field, message } => ApiError::validation(field, message),
            CoreError::UpstreamRateLimitError => {
                tracing::error!("Upstream rate limited: {}", error);
                ApiError::ServiceUnavailable(BUSY_MESSAGE.to_string())
            }
            CoreError::UpstreamTimeoutError
            | CoreError::UpstreamFormatError(_)
            | CoreError::ExternalServiceError(_) => {
                tracing::error!("Upstream failure: {}", error);
                ApiError::BadGateway(UPSTREAM_MESSAGE.to_string())
            }
            CoreError::MissingConfiguration(_)
            | CoreError::UpstreamAuthError
            | CoreError::InternalServerError => {
                tracing::error!("Internal failure: {}", error);
                ApiError::InternalServerError(INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                let field = field.to_string();
                errors.iter().map(move |error| FieldError {
                    field: field.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                })
            })
            .collect();
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        ApiError::Validation {
            message: "Request validation failed".to_string(),
            errors: field_errors,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation("body", rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::validation("body", rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::validation("image", "image too large");
        }
        ApiError::validation("body", error.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();
        let message = self.to_string();
        let errors = match self {
            ApiError::Validation { errors, .. } => errors,
            _ => Vec::new(),
        };

        (
            status,
            Json(ApiErrorResponse {
                code,
                status: status.as_u16(),
                message,
                errors,
            }),
        )
            .into_response()
    }
}

/// JSON body extractor that also runs the `validator` rules of `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_status_mapping() {
        let cases = [
            (
                CoreError::validation("ingredients", "empty"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                CoreError::MissingConfiguration("token".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (CoreError::UpstreamAuthError, StatusCode::INTERNAL_SERVER_ERROR),
            (CoreError::UpstreamTimeoutError, StatusCode::BAD_GATEWAY),
            (
                CoreError::UpstreamFormatError("no choices".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::ExternalServiceError("down".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::UpstreamRateLimitError, StatusCode::SERVICE_UNAVAILABLE),
            (CoreError::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn test_upstream_detail_is_not_exposed() {
        let error = ApiError::from(CoreError::ExternalServiceError(
            "llm7 returned 500 Internal Server Error".to_string(),
        ));
        assert_eq!(error.to_string(), UPSTREAM_MESSAGE);
    }

    #[test]
    fn test_validation_names_the_field() {
        match ApiError::from(CoreError::validation("style", "unknown style 'Martian'")) {
            ApiError::Validation { errors, .. } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "style");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
