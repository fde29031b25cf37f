//! # wikidoc - Source File Wiki Generator
//!
//! `wikidoc` reads one source file, asks a Groq-hosted chat model to write a
//! nine-section technical wiki page about it, streams the markdown to the
//! terminal as it is generated and saves it to `docs/<name>_wiki.md`.
//!
//! ## Quick Start
//!
//! ```bash
//! export GROQ_API_KEY="gsk_..."
//!
//! # Document a file (writes docs/report_wiki.md)
//! wikidoc ./report.py
//!
//! # Use another model, print only
//! wikidoc --model llama-3.3-70b-versatile --no-save ./src/main.rs
//!
//! # List recognized file extensions
//! wikidoc types
//! ```
//!
//! ## Configuration
//!
//! `GROQ_API_KEY` is required. `GROQ_MODEL` and `GROQ_BASE_URL` override the
//! defaults, and may also be set in a `.env` file. Optional defaults live in
//! `~/.config/wikidoc/config.toml`:
//!
//! ```toml
//! [wikidoc]
//! model = "llama-3.1-8b-instant"
//! endpoint = "https://api.groq.com/openai"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration resolution (environment, config file, defaults).
pub mod config;

/// Error kinds and exit codes.
pub mod error;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Console echo and markdown persistence.
pub mod sink;

/// Source file loading and file-type classification.
pub mod source;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;

/// Prompt construction and the streaming chat client.
pub mod wiki;

pub use error::{Result, WikiError};
