use crate::domain::auth::credentials::CredentialsError;
use crate::domain::contact::errors::ContactError;

use actix_web::http::header::{self, HeaderValue};
use actix_web::HttpResponse;
use actix_web::{http::StatusCode, ResponseError};

const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Malformed JSON payload: {0}")]
    MalformedPayload(String),
    #[error("Not authenticated: {0}")]
    AuthError(String),
    #[error("Delivery error: {0}")]
    DeliveryError(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

#[derive(serde::Serialize)]
pub struct ResponseMessage<'a> {
    pub message: &'a str,
}

impl From<ContactError> for AppError {
    fn from(error: ContactError) -> Self {
        match error {
            ContactError::DeliveryFailed(s) => AppError::DeliveryError(s),
            ContactError::Unexpected(e) => AppError::Unexpected(e),
            e => AppError::ValidationError(e.to_string()),
        }
    }
}

impl From<CredentialsError> for AppError {
    fn from(error: CredentialsError) -> Self {
        match error {
            CredentialsError::AuthError(s) => AppError::AuthError(s),
            CredentialsError::Unexpected(e) => AppError::Unexpected(e),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::AuthError(_) => StatusCode::UNAUTHORIZED,
            AppError::DeliveryError(_) | AppError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::ValidationError(s)
            | AppError::MalformedPayload(s)
            | AppError::DeliveryError(s) => s.as_str(),
            AppError::AuthError(_) => "Authentication required.",
            AppError::Unexpected(e) => {
                tracing::error!(error.cause_chain = ?e, "Request failed unexpectedly");
                UNEXPECTED_ERROR_MESSAGE
            }
        };
        let mut response = HttpResponse::build(self.status_code()).json(ResponseMessage { message });
        if let AppError::AuthError(_) = self {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(r#"Basic realm="contact""#),
            );
        }
        response
    }
}
