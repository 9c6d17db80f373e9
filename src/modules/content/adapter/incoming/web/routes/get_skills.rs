use actix_web::{get, web, HttpResponse, Responder};

use crate::content::application::domain::entities::Skill;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "content",
    responses((status = 200, description = "Skill groups in display order", body = [Skill]))
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.content.skills())
}
