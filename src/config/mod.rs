//! Configuration resolution from CLI options, environment and config file.

mod manager;

pub use manager::{
    API_KEY_ENV, BASE_URL_ENV, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    EnvConfig, MODEL_ENV, ResolveOptions, ResolvedConfig, WikidocConfig, resolve_config,
};
