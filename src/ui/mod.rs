use std::io::{self, BufRead, IsTerminal};

use inquire::{InquireError, Text};

use crate::error::{Result, WikiError};

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Maps a prompt result so that user cancellation becomes `Ok(None)`.
fn cancellation_as_none<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_prompt_cancelled(&e) => Ok(None),
        Err(e) => Err(WikiError::Prompt {
            message: e.to_string(),
        }),
    }
}

/// Reads one path from a non-interactive source, such as piped stdin.
///
/// Returns `Ok(None)` at end of input or on a blank line.
fn read_path_line(mut reader: impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| WikiError::Prompt {
        message: e.to_string(),
    })?;

    let path = line.trim();
    Ok((!path.is_empty()).then(|| path.to_string()))
}

/// Asks the user for the path of the file to document.
///
/// Returns `Ok(None)` if the user cancels the prompt (Esc or Ctrl+C).
/// When stdin is not a terminal, the first line of stdin is used instead.
pub fn prompt_for_path() -> Result<Option<String>> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return read_path_line(stdin.lock());
    }

    let answer = Text::new("File to document:")
        .with_help_message("Path to a single source file, Esc to cancel")
        .prompt();

    cancellation_as_none(answer).map(|path| path.map(|p| p.trim().to_string()))
}
