use chrono::Local;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{
    ConfigFile, ConfigManager, EnvConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
use crate::error::{Result, WikiError};
use crate::sink::{OUTPUT_DIR, echo_stream, ensure_output_dir, save_artifact};
use crate::source::SourceReader;
use crate::ui::{self, Spinner, Style};
use crate::wiki::{ChatClient, ChatRequest, build_prompt};
use crate::{output, status, warn};

pub struct GenerateOptions {
    pub file: Option<String>,
    pub model: Option<String>,
    pub save: bool,
}

/// Documents one source file.
///
/// Order of checks: API key, file path, file contents. Nothing is read and
/// no request is sent until the earlier checks pass.
pub async fn run_generate(options: GenerateOptions) -> Result<()> {
    let config = load_config(&options)?;

    let Some(path) = resolve_path(options.file)? else {
        return Ok(());
    };

    if !path.exists() {
        return Err(WikiError::PathNotFound { path });
    }

    let document = SourceReader::read(&path)?;
    let prompt = build_prompt(
        &document.content,
        &document.path,
        &Local::now().naive_local(),
    );

    status!(
        "Generating wiki for {} ({}) with model {}",
        Style::value(document.path.display()),
        Style::secondary(document.file_type),
        Style::value(&config.model)
    );
    status!("{}", Style::secondary("=".repeat(50)));

    let client = ChatClient::new(config.endpoint, config.api_key);
    let request = ChatRequest::new(config.model, prompt);

    let spinner = (!output::is_quiet()).then(|| Spinner::new("Waiting for the model..."));
    let stream = client.stream_completion(&request).await?;
    let full_response = echo_stream(stream, &mut io::stdout(), spinner).await?;

    if !full_response.ends_with('\n') {
        println!();
    }

    if full_response.is_empty() {
        warn!("{} The model returned no content", Style::warning("Warning:"));
    }

    if options.save {
        persist(Path::new(OUTPUT_DIR), &document.path, &full_response);
    }

    Ok(())
}

fn load_config(options: &GenerateOptions) -> Result<ResolvedConfig> {
    let config_file = match ConfigManager::new() {
        Ok(manager) => manager.load_or_default(),
        Err(e) => {
            tracing::debug!("config file unavailable: {e:#}");
            ConfigFile::default()
        }
    };

    let resolve_options = ResolveOptions {
        model: options.model.clone(),
    };
    let config = resolve_config(&resolve_options, &EnvConfig::from_env(), &config_file)?;

    tracing::debug!(model = %config.model, endpoint = %config.endpoint, "resolved configuration");
    Ok(config)
}

fn resolve_path(file: Option<String>) -> Result<Option<PathBuf>> {
    let path = match file {
        Some(path) => Some(path),
        None => ui::prompt_for_path()?,
    };
    Ok(path.map(PathBuf::from))
}

/// Saves the artifact, reporting the outcome instead of returning it.
fn persist(dir: &Path, source_path: &Path, content: &str) {
    let result = ensure_output_dir(dir).and_then(|created| {
        if created {
            status!("Created directory {}", Style::value(dir.display()));
        }
        save_artifact(dir, source_path, content)
    });

    match result {
        Ok(path) => status!(
            "\n{} Wiki document saved: {}",
            Style::success("✓"),
            Style::value(path.display())
        ),
        Err(e) => {
            warn!("\n{} {e}", Style::error("Error:"));
        }
    }
}
