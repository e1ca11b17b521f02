//! Handles settings for the application. Configuration is written in
//! `settings.toml`.

use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Ui {
    /// Group cards per dashboard page.
    pub page_size: usize,
    /// Simulated network delay applied to every form submission.
    pub submit_latency_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Demo {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub ui: Ui,
    pub demo: Demo,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings"))
            .build()?;

        settings.try_deserialize()
    }
}
