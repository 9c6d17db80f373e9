use actix_web::{get, web, HttpResponse, Responder};

use crate::content::application::domain::entities::TimelineItem;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/timeline",
    tag = "content",
    responses((status = 200, description = "Experience and education entries in display order", body = [TimelineItem]))
)]
#[get("/api/timeline")]
pub async fn get_timeline_handler(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.content.timeline())
}
