use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct WelcomeResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content: &'static str,
    email: &'static str,
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: "Welcome to Portfolio API",
    })
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// Site content is always loaded by the time the server accepts traffic, so
/// the only thing worth reporting is email delivery. An unconfigured mailer
/// never fails the probe: the read-only endpoints still serve.
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let email_status = if data.contact.is_configured() {
        "configured"
    } else {
        "unconfigured"
    };

    HttpResponse::Ok().json(ReadinessResponse {
        status: "ok",
        content: "loaded",
        email: email_status,
    })
}
