use crate::{
    domain::{
        auth::ports::AuthService,
        contact::{models::submission::ContactSubmissionRequest, ports::ContactService},
    },
    inbound::http::{
        auth::basic_authentication,
        errors::{AppError, ResponseMessage},
        SharedAuthState, SharedContactState,
    },
};
use actix_web::{web, HttpRequest, HttpResponse};

const SUCCESS_MESSAGE: &str = "Contact form has been submitted successfully.";

#[tracing::instrument(
    name = "Submit a contact form",
    skip(body, contact_state, auth_state, request),
    fields(username = tracing::field::Empty, user_id = tracing::field::Empty)
)]
pub async fn contact_user<CS: ContactService, AS: AuthService>(
    body: web::Bytes,
    contact_state: web::Data<SharedContactState<CS>>,
    auth_state: web::Data<SharedAuthState<AS>>,
    request: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let credentials =
        basic_authentication(&request).map_err(|e| AppError::AuthError(e.to_string()))?;
    tracing::Span::current().record("username", credentials.username());

    let sender = auth_state.auth_service().authenticate(credentials).await?;
    tracing::Span::current().record("user_id", tracing::field::display(&sender.id));

    // The body is only looked at once the caller is known.
    let submission: ContactSubmissionRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedPayload(format!("Invalid JSON payload: {}", e)))?;

    contact_state
        .contact_service()
        .submit(submission, &sender)
        .await?;

    Ok(HttpResponse::Ok().json(ResponseMessage {
        message: SUCCESS_MESSAGE,
    }))
}
