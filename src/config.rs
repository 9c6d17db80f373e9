use std::env;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub relay: String,
    pub username: String,
    pub password: String,
    /// Where contact notifications land; defaults to the SMTP account itself.
    pub recipient: String,
}

/// Everything the process reads from the environment, resolved once at
/// startup. SMTP settings are optional on purpose: without them the GET
/// endpoints run normally and only contact delivery degrades.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub content_path: PathBuf,
    pub asset_root: PathBuf,
    pub dev_mode: bool,
    pub smtp: Option<SmtpSettings>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // Try .env.{environment} first, then fall back to .env
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let content_path = env::var("CONTENT_PATH")
            .unwrap_or_else(|_| "content/site.json".to_string())
            .into();
        let asset_root = env::var("ASSET_ROOT")
            .unwrap_or_else(|_| "public/images".to_string())
            .into();

        let smtp = match (env::var("SMTP_USERNAME"), env::var("SMTP_PASSWORD")) {
            (Ok(username), Ok(password)) => Some(SmtpSettings {
                relay: env::var("SMTP_RELAY").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                recipient: env::var("CONTACT_RECIPIENT").unwrap_or_else(|_| username.clone()),
                username,
                password,
            }),
            _ => None,
        };

        Ok(AppConfig {
            host,
            port,
            content_path,
            asset_root,
            dev_mode: env_name == "development",
            smtp,
        })
    }
}
