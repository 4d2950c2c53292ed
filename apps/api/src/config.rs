use anyhow::{bail, Context, Result};

/// Which backend writes the prose sections of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeBackend {
    /// Deterministic template prose assembled from the score breakdown.
    Template,
    /// Gemini rewrite of the template prose. Requires GEMINI_API_KEY.
    Gemini,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub narrative_backend: NarrativeBackend,
    pub gemini_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let narrative_backend = match std::env::var("NARRATIVE_BACKEND").as_deref() {
            Ok("gemini") => NarrativeBackend::Gemini,
            Ok("template") | Err(_) => NarrativeBackend::Template,
            Ok(other) => bail!("NARRATIVE_BACKEND must be 'template' or 'gemini', got '{other}'"),
        };

        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok();
        if narrative_backend == NarrativeBackend::Gemini && gemini_api_key.is_none() {
            bail!("GEMINI_API_KEY is required when NARRATIVE_BACKEND=gemini");
        }

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            narrative_backend,
            gemini_api_key,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
