use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::engine::{FormatEngine, FormatError};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Formats one file in place. The file is rewritten even when the output is
/// byte-identical; on any failure it is left untouched.
pub async fn format_file(
    engine: &dyn FormatEngine,
    parser: &str,
    path: &Path,
) -> Result<(), FormatError> {
    let display = path.display().to_string();
    let input = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FormatError::Read {
            path: display.clone(),
            source,
        })?;
    let formatted = engine.format(parser, &input).await?;
    write_text_atomic(path, &formatted)
        .await
        .map_err(|source| FormatError::Write {
            path: display,
            source,
        })
}

// Temp file + rename so a failed write never leaves partial content behind.
async fn write_text_atomic(path: &Path, content: &str) -> Result<(), std::io::Error> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let temp_name = format!(
        ".{}.tmp-{}-{}",
        path.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("fmtbot"),
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    let temp_path = parent.join(temp_name);
    tokio::fs::write(&temp_path, content).await?;
    tokio::fs::rename(&temp_path, path).await
}
