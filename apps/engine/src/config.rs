use anyhow::{Context, Result};

use crate::models::style::{Rgb, Style, TemplateId};

/// Runtime configuration for the export runner, loaded from environment
/// variables (a `.env` file is honored when present).
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the store slots.
    pub data_dir: String,
    /// Explicit output path; when unset the file name is derived from the
    /// person's name.
    pub out_path: Option<String>,
    pub accent: Rgb,
    pub template: TemplateId,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let accent = match std::env::var("RESUMADE_ACCENT") {
            Ok(raw) => Rgb::from_hex(&raw)
                .map_err(anyhow::Error::msg)
                .context("RESUMADE_ACCENT must be a #RRGGBB color")?,
            Err(_) => Style::default().accent,
        };
        let template = match std::env::var("RESUMADE_TEMPLATE") {
            Ok(raw) => raw
                .parse::<TemplateId>()
                .map_err(anyhow::Error::msg)
                .context("RESUMADE_TEMPLATE must be classic, modern, or creative")?,
            Err(_) => TemplateId::default(),
        };

        Ok(Config {
            data_dir: std::env::var("RESUMADE_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            out_path: std::env::var("RESUMADE_OUT").ok(),
            accent,
            template,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn style(&self) -> Style {
        Style {
            accent: self.accent,
            template: self.template,
        }
    }
}
