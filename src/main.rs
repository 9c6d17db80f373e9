pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::contact;
pub use modules::content;

use crate::config::AppConfig;
use crate::contact::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::contact::application::ports::outgoing::email_sender::EmailSender;
use crate::contact::application::service::contact_service::ContactService;
use crate::content::application::domain::entities::SiteContent;
use crate::content::application::service::content_service::ContentService;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
    pub contact: Arc<ContactService>,
    pub dev_mode: bool,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API...");

    let config = AppConfig::from_env()?;

    let site_content = Arc::new(SiteContent::from_file(&config.content_path)?);
    info!(
        "Loaded site content: {} projects, {} skill groups",
        site_content.projects.len(),
        site_content.skills.len()
    );

    let content_service = Arc::new(ContentService::new(
        site_content,
        config.asset_root.clone(),
    ));

    // A missing SMTP credential must not take the read-only endpoints down
    // with it; the contact handler degrades to a configuration error instead.
    let contact_service = Arc::new(match &config.smtp {
        Some(smtp) => {
            let sender = SmtpEmailSender::new(
                &smtp.relay,
                &smtp.username,
                &smtp.password,
                &smtp.recipient,
            )?;
            info!("Email delivery configured via {}", smtp.relay);
            let sender: Arc<dyn EmailSender> = Arc::new(sender);
            ContactService::new(sender)
        }
        None => {
            warn!("SMTP_USERNAME/SMTP_PASSWORD not set; contact submissions will be rejected");
            ContactService::unconfigured()
        }
    });

    let state = AppState {
        content: content_service,
        contact: contact_service,
        dev_mode: config.dev_mode,
    };

    let asset_root = config.asset_root.clone();
    let server_url = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{server_url}");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(Files::new("/uploads", asset_root.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::index);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_timeline_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_interests_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_contact_info_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_single_project_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
