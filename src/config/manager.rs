use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::WikiError;
use crate::paths;
use crate::ui::Style;

/// Environment variable holding the Groq API key (required).
pub const API_KEY_ENV: &str = "GROQ_API_KEY";
/// Environment variable overriding the default model.
pub const MODEL_ENV: &str = "GROQ_MODEL";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "GROQ_BASE_URL";

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";

/// Default settings in the `[wikidoc]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WikidocConfig {
    /// Default model name.
    pub model: Option<String>,
    /// OpenAI-compatible API base URL.
    pub endpoint: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/wikidoc/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub wikidoc: WikidocConfig,
}

/// Settings taken from the process environment, read once at startup.
///
/// Empty values are treated as unset.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            api_key: var(API_KEY_ENV),
            model: var(MODEL_ENV),
            base_url: var(BASE_URL_ENV),
        }
    }
}

/// CLI overrides that take precedence over every other source.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Model name override.
    pub model: Option<String>,
}

/// Resolved configuration after merging CLI, environment and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

/// Resolves configuration.
///
/// Priority: CLI option, then environment, then config file, then built-in
/// default. The API key only comes from the environment and is required.
pub fn resolve_config(
    options: &ResolveOptions,
    env: &EnvConfig,
    config_file: &ConfigFile,
) -> std::result::Result<ResolvedConfig, WikiError> {
    let api_key = env.api_key.clone().ok_or_else(|| {
        WikiError::config(format!(
            "Missing required configuration: '{API_KEY_ENV}'\n\n\
             Set it in your environment or in a .env file:\n  \
             export {API_KEY_ENV}=\"your-api-key\""
        ))
    })?;

    let model = options
        .model
        .as_ref()
        .or(env.model.as_ref())
        .or(config_file.wikidoc.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let endpoint = env
        .base_url
        .as_ref()
        .or(config_file.wikidoc.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    Ok(ResolvedConfig {
        api_key,
        model,
        endpoint,
    })
}

/// Loads the optional configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/wikidoc/config.toml`
    /// or `~/.config/wikidoc/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or malformed one is reported
    /// as a warning.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file");
            return ConfigFile::default();
        }

        self.load().unwrap_or_else(|e| {
            crate::warn!("{} {e:#}\nUsing defaults.\n", Style::warning("Warning:"));
            ConfigFile::default()
        })
    }
}
