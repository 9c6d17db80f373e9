use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use crate::content::application::domain::entities::{
    ContactInfo, Interest, Profile, Project, SiteContent, Skill, TimelineItem,
};
use crate::content::application::service::image_embed::embed_image;

/// Profile as served to the client: the static record plus the optional
/// inlined image, so no second round-trip is needed for the hero section.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Error loading project: {0}")]
    ImageEmbed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Error loading projects: {0}")]
pub struct ListProjectsError(pub String);

#[derive(Debug, Clone, thiserror::Error)]
#[error("Error loading profile: {0}")]
pub struct GetProfileError(pub String);

/// Read-only accessors over the immutable site content. All collections are
/// served verbatim in source order; only profile and projects get the
/// image-inlining treatment.
pub struct ContentService {
    content: Arc<SiteContent>,
    asset_root: PathBuf,
}

impl ContentService {
    pub fn new(content: Arc<SiteContent>, asset_root: PathBuf) -> Self {
        Self {
            content,
            asset_root,
        }
    }

    pub fn get_profile(&self) -> Result<ProfileView, GetProfileError> {
        let profile = self.content.profile.clone();
        let image_data = match &profile.image {
            Some(image_ref) => embed_image(image_ref, &self.asset_root)
                .map_err(|e| GetProfileError(e.to_string()))?,
            None => None,
        };
        Ok(ProfileView {
            profile,
            image_data,
        })
    }

    pub fn skills(&self) -> &[Skill] {
        &self.content.skills
    }

    pub fn timeline(&self) -> &[TimelineItem] {
        &self.content.timeline
    }

    pub fn interests(&self) -> &[Interest] {
        &self.content.interests
    }

    pub fn contact_info(&self) -> &ContactInfo {
        &self.content.contact_info
    }

    /// All projects, each with its image inlined when the referenced asset
    /// exists. A single unreadable asset fails the whole listing rather than
    /// silently dropping one image.
    pub fn list_projects(&self) -> Result<Vec<ProjectView>, ListProjectsError> {
        self.content
            .projects
            .iter()
            .map(|project| {
                self.project_view(project)
                    .map_err(|e| ListProjectsError(e.to_string()))
            })
            .collect()
    }

    pub fn get_project(&self, id: u32) -> Result<ProjectView, GetProjectError> {
        let project = self
            .content
            .projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(GetProjectError::NotFound)?;

        self.project_view(project)
            .map_err(|e| GetProjectError::ImageEmbed(e.to_string()))
    }

    fn project_view(&self, project: &Project) -> std::io::Result<ProjectView> {
        let image_data = match &project.image {
            Some(image_ref) => embed_image(image_ref, &self.asset_root)?,
            None => None,
        };
        Ok(ProjectView {
            project: project.clone(),
            image_data,
        })
    }
}
