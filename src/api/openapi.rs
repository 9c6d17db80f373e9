use utoipa::OpenApi;

use crate::contact::application::domain::contact_message::ContactForm;
use crate::contact::application::service::contact_service::ContactReceipt;
use crate::content::application::domain::entities::{
    ContactInfo, Interest, Profile, Project, Skill, SocialLink, TimelineItem,
};
use crate::content::application::service::content_service::{ProfileView, ProjectView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only portfolio content plus contact-form relay"
    ),
    paths(
        crate::content::adapter::incoming::web::routes::get_profile_handler,
        crate::content::adapter::incoming::web::routes::get_skills_handler,
        crate::content::adapter::incoming::web::routes::get_timeline_handler,
        crate::content::adapter::incoming::web::routes::get_interests_handler,
        crate::content::adapter::incoming::web::routes::get_contact_info_handler,
        crate::content::adapter::incoming::web::routes::get_projects_handler,
        crate::content::adapter::incoming::web::routes::get_single_project_handler,
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(schemas(
        Profile,
        ProfileView,
        Skill,
        TimelineItem,
        Interest,
        SocialLink,
        ContactInfo,
        Project,
        ProjectView,
        ContactForm,
        ContactReceipt,
    )),
    tags(
        (name = "content", description = "Read-only site content"),
        (name = "contact", description = "Contact form relay")
    )
)]
pub struct ApiDoc;
