pub mod content_service;
pub mod image_embed;
