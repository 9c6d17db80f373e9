use actix_web::http::StatusCode;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::contact::application::domain::contact_message::{ContactForm, ValidationError};
use crate::contact::application::service::contact_service::SubmitContactError;
use crate::{shared::api::ApiResponse, AppState};

/// Safe user-facing text per failure class. Full provider detail goes to the
/// log, and into the body only in development mode.
fn delivery_failure(err: &SubmitContactError) -> (StatusCode, &'static str) {
    match err {
        SubmitContactError::Validation(validation) => (
            StatusCode::BAD_REQUEST,
            match validation {
                ValidationError::MissingField => "All fields are required",
                ValidationError::InvalidEmail => "Invalid email format",
            },
        ),
        SubmitContactError::NotConfigured => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Contact form is not configured. Please contact the administrator.",
        ),
        SubmitContactError::ProviderAuth(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Email authentication failed. Please contact the administrator.",
        ),
        SubmitContactError::ProviderTimeout => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Email service connection timeout. Please try again.",
        ),
        SubmitContactError::ProviderConnection(_) => (
            StatusCode::BAD_GATEWAY,
            "Cannot connect to email service. Please try again later.",
        ),
        SubmitContactError::ProviderUnknown(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send message. Please try again later.",
        ),
    }
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Message relayed; echoes name, email and subject"),
        (status = 400, description = "Missing field or malformed email"),
        (status = 502, description = "Cannot reach the email provider"),
        (status = 503, description = "Provider timed out or delivery is not configured"),
        (status = 500, description = "Authentication or unknown delivery failure")
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    form: web::Json<ContactForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.submit(form.into_inner()).await {
        Ok(receipt) => {
            info!(
                "Contact form submission relayed: name={} email={} subject={}",
                receipt.name, receipt.email, receipt.subject
            );
            ApiResponse::ok("Message received successfully", receipt)
        }

        Err(SubmitContactError::Validation(validation)) => {
            ApiResponse::bad_request(&validation.to_string())
        }

        Err(err) => {
            error!("Contact form delivery failed: {err}");
            let (status, message) = delivery_failure(&err);
            let detail = data.dev_mode.then(|| err.to_string());
            ApiResponse::error_with_detail(status, message, detail)
        }
    }
}
