use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Deserializes `""` (or whitespace) as `None`. The upstream content files use
/// empty strings for absent links and images.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub about_title: String,
    pub about_paragraphs: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub title: String,
    /// Comma-joined free text, rendered as-is by the client.
    pub skills: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimelineItem {
    pub title: String,
    pub company: String,
    /// Free-form display string ("Dec 2024 - June 2025"), never parsed.
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Interest {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Everything the read-only endpoints serve, loaded once at startup and held
/// behind `Arc`. Tests build one from fixtures instead of the content file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub timeline: Vec<TimelineItem>,
    pub interests: Vec<Interest>,
    pub contact_info: ContactInfo,
    pub projects: Vec<Project>,
}

impl SiteContent {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading site content from {}", path.display()))?;
        let content: SiteContent = serde_json::from_str(&raw)
            .with_context(|| format!("parsing site content from {}", path.display()))?;

        let mut seen = HashSet::new();
        for project in &content.projects {
            anyhow::ensure!(
                seen.insert(project.id),
                "duplicate project id {} in {}",
                project.id,
                path.display()
            );
        }

        Ok(content)
    }
}
