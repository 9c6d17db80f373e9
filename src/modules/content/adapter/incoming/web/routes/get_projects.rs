use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::content::application::service::content_service::ProjectView;
use crate::{shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    responses(
        (status = 200, description = "All projects, each with imageData inlined when the referenced asset exists", body = [ProjectView]),
        (status = 500, description = "A referenced project image could not be read")
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.list_projects() {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(err) => {
            error!("Failed to load projects: {err}");
            ApiResponse::internal_error("Error loading projects")
        }
    }
}
