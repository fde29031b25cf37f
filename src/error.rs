//! Error kinds for the documentation pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the pipeline's error type.
pub type Result<T> = std::result::Result<T, WikiError>;

/// Failures that can end (or, for `Persist`, interrupt) an invocation.
#[derive(Error, Debug)]
pub enum WikiError {
    /// Required configuration is missing or unusable.
    #[error("{message}")]
    Config {
        /// Human-readable explanation with a remediation hint
        message: String,
    },

    /// The supplied source path does not exist.
    #[error("File not found: {}", path.display())]
    PathNotFound {
        /// Path as given by the user
        path: PathBuf,
    },

    /// The source file exists but could not be read as UTF-8 text.
    #[error("Failed to read file '{}': {source}", path.display())]
    Read {
        /// Path of the file being read
        path: PathBuf,
        /// Underlying I/O or decode failure
        #[source]
        source: io::Error,
    },

    /// The source file has no content to document.
    #[error("File '{}' is empty, nothing to document", path.display())]
    EmptySource {
        /// Path of the empty file
        path: PathBuf,
    },

    /// Network or service failure while talking to the chat API.
    #[error("{message}")]
    Transport {
        /// Description of the failure, including the HTTP status when known
        message: String,
    },

    /// The output directory or file could not be written.
    #[error("Failed to save '{}': {source}", path.display())]
    Persist {
        /// Directory or file that could not be written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Generated text could not be written to the console.
    #[error("Failed to write to standard output: {source}")]
    Stdout {
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Reading the file path interactively failed.
    #[error("Failed to read input: {message}")]
    Prompt {
        /// Error reported by the prompt library
        message: String,
    },
}

impl WikiError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Process exit code (sysexits) for this failure.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Config { .. } => exitcode::CONFIG,
            Self::PathNotFound { .. } => exitcode::NOINPUT,
            Self::Read { .. } | Self::Stdout { .. } | Self::Prompt { .. } => exitcode::IOERR,
            Self::EmptySource { .. } => exitcode::DATAERR,
            Self::Transport { .. } => exitcode::UNAVAILABLE,
            // Reported where it happens; a failed save never fails the run.
            Self::Persist { .. } => exitcode::OK,
        }
    }
}
