//! Backend endpoint configuration resolved at startup.

use std::{collections::HashMap, fs};

use anyhow::{bail, Context};
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug)]
pub struct Settings {
    pub backend_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
        }
    }
}

/// Layered resolution: built-in default, then `tutor.toml`, then environment,
/// then the CLI flag.
pub fn load_settings(cli_backend_url: Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("tutor.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("backend_url") {
                settings.backend_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("TUTOR_BACKEND_URL") {
        settings.backend_url = v;
    }
    if let Ok(v) = std::env::var("APP__BACKEND_URL") {
        settings.backend_url = v;
    }

    if let Some(v) = cli_backend_url {
        settings.backend_url = v;
    }

    settings
}

/// Validates the configured origin and drops trailing slashes so route
/// formatting stays uniform.
pub fn prepare_backend_url(raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Settings::default().backend_url);
    }

    let url = Url::parse(raw).with_context(|| format!("invalid backend url '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => {}
        other => bail!("unsupported backend url scheme '{other}'"),
    }

    Ok(raw.trim_end_matches('/').to_string())
}
