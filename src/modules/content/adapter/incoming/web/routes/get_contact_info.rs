use actix_web::{get, web, HttpResponse, Responder};

use crate::content::application::domain::entities::ContactInfo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/contact-info",
    tag = "content",
    responses((status = 200, description = "Public contact details and social links", body = ContactInfo))
)]
#[get("/api/contact-info")]
pub async fn get_contact_info_handler(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.content.contact_info())
}
