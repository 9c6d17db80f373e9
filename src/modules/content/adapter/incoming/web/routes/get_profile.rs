use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::content::application::service::content_service::ProfileView;
use crate::{shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "content",
    responses(
        (status = 200, description = "Profile, with imageData inlined when the referenced asset exists", body = ProfileView),
        (status = 500, description = "Profile image exists but could not be read")
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_profile() {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => {
            error!("Failed to load profile: {err}");
            ApiResponse::internal_error("Error loading profile")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn serves_profile_with_client_field_names() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::new().build())
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["name"], "Test Person");
        assert!(json["aboutParagraphs"].is_array());
        // No asset on disk in the default fixture, so no imageData.
        assert!(json.get("imageData").is_none());
    }
}
