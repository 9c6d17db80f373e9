use actix_web::{get, web, HttpResponse, Responder};

use crate::content::application::domain::entities::Interest;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/interests",
    tag = "content",
    responses((status = 200, description = "Interest cards in display order", body = [Interest]))
)]
#[get("/api/interests")]
pub async fn get_interests_handler(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.content.interests())
}
