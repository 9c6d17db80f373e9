use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::content::application::service::content_service::{GetProjectError, ProjectView};
use crate::{shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "content",
    params(("id" = u32, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Project with imageData inlined when the referenced asset exists", body = ProjectView),
        (status = 404, description = "No project with that id"),
        (status = 500, description = "The referenced project image could not be read")
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<u32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.get_project(id) {
        Ok(project) => HttpResponse::Ok().json(project),

        Err(GetProjectError::NotFound) => ApiResponse::not_found("Project not found"),

        Err(GetProjectError::ImageEmbed(msg)) => {
            error!("Failed to load image for project {id}: {msg}");
            ApiResponse::internal_error("Error loading project")
        }
    }
}
