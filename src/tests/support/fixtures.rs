use crate::content::application::domain::entities::{
    ContactInfo, Interest, Profile, Project, SiteContent, Skill, SocialLink, TimelineItem,
};

/// Small fixed content set for route and service tests. Project ids are
/// deliberately non-contiguous (1, 2, 7) so lookups cannot pass by index
/// accident.
pub fn sample_content() -> SiteContent {
    SiteContent {
        profile: Profile {
            name: "Test Person".to_string(),
            title: "Software Engineer".to_string(),
            bio: "Builds small reliable services.".to_string(),
            about_title: "Hello! I'm Test Person".to_string(),
            about_paragraphs: vec![
                "First paragraph.".to_string(),
                "Second paragraph.".to_string(),
            ],
            image: Some("portrait.jpg".to_string()),
        },
        skills: vec![
            Skill {
                title: "Languages".to_string(),
                skills: "Rust, Python, SQL".to_string(),
            },
            Skill {
                title: "Web".to_string(),
                skills: "actix-web, React".to_string(),
            },
        ],
        timeline: vec![TimelineItem {
            title: "Engineer".to_string(),
            company: "Example Corp".to_string(),
            date: "2023 - Present".to_string(),
            description: "Backend work.".to_string(),
        }],
        interests: vec![Interest {
            icon: "🦀".to_string(),
            title: "Systems".to_string(),
            description: "Small reliable services.".to_string(),
        }],
        contact_info: ContactInfo {
            email: "test@example.com".to_string(),
            phone: None,
            location: "Somewhere".to_string(),
            social: vec![SocialLink {
                platform: "GitHub".to_string(),
                url: "https://github.com/test-person".to_string(),
            }],
        },
        projects: vec![
            Project {
                id: 1,
                title: "First Project".to_string(),
                description: "A project without an image.".to_string(),
                category: None,
                contribution: None,
                about: None,
                technologies: vec!["Rust".to_string()],
                github: Some("https://github.com/test-person/first".to_string()),
                demo: None,
                image: None,
            },
            Project {
                id: 2,
                title: "Second Project".to_string(),
                description: "A project with an image reference.".to_string(),
                category: Some("Web".to_string()),
                contribution: Some("Sole author".to_string()),
                about: Some("Longer write-up.".to_string()),
                technologies: vec!["Rust".to_string(), "actix-web".to_string()],
                github: None,
                demo: Some("https://example.com/demo".to_string()),
                image: Some("screenshot.png".to_string()),
            },
            Project {
                id: 7,
                title: "Seventh Project".to_string(),
                description: "Non-contiguous id.".to_string(),
                category: None,
                contribution: None,
                about: None,
                technologies: vec!["Python".to_string()],
                github: None,
                demo: None,
                image: None,
            },
        ],
    }
}
