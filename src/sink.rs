//! Console echo and markdown persistence for generated documentation.

use futures_util::{Stream, StreamExt};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, WikiError};
use crate::fs::atomic_write;
use crate::ui::Spinner;

/// Directory (relative to the working directory) that receives artifacts.
pub const OUTPUT_DIR: &str = "docs";

/// Suffix appended to the source file stem.
pub const OUTPUT_SUFFIX: &str = "_wiki.md";

/// Writes each fragment to `writer` as it arrives and returns their concatenation.
///
/// Every fragment is flushed immediately, in arrival order. If a spinner is
/// given it is cleared before the first fragment is written. The first stream
/// error aborts and is returned; text already written stays on the console.
pub async fn echo_stream<S, W>(
    mut stream: S,
    writer: &mut W,
    mut spinner: Option<Spinner>,
) -> Result<String>
where
    S: Stream<Item = Result<String>> + Unpin,
    W: Write,
{
    let mut full_response = String::new();
    let mut fragments = 0usize;

    while let Some(fragment) = stream.next().await {
        let fragment = fragment?;

        if let Some(spinner) = spinner.take() {
            spinner.stop();
        }

        if fragment.is_empty() {
            continue;
        }

        writer
            .write_all(fragment.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| WikiError::Stdout { source })?;
        full_response.push_str(&fragment);
        fragments += 1;
    }

    tracing::debug!(fragments, bytes = full_response.len(), "stream finished");
    Ok(full_response)
}

/// Returns `<stem>_wiki.md` for `source_path`.
///
/// The stem is the file name without its last extension.
pub fn output_file_name(source_path: &Path) -> String {
    let stem = source_path
        .file_stem()
        .unwrap_or_else(|| source_path.as_os_str())
        .to_string_lossy();
    format!("{stem}{OUTPUT_SUFFIX}")
}

/// Creates `dir` and any missing parents. Returns `true` if it did not exist.
pub fn ensure_output_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(dir).map_err(|source| WikiError::Persist {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Writes `content` to `dir/<stem>_wiki.md`, replacing any earlier artifact.
///
/// `dir` must already exist, see [`ensure_output_dir`].
pub fn save_artifact(dir: &Path, source_path: &Path, content: &str) -> Result<PathBuf> {
    let output_path = dir.join(output_file_name(source_path));

    atomic_write(&output_path, content).map_err(|source| WikiError::Persist {
        path: output_path.clone(),
        source,
    })?;

    tracing::debug!(path = %output_path.display(), bytes = content.len(), "saved artifact");
    Ok(output_path)
}
