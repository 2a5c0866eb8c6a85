use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use crate::errors::SimcheckError;

/// Output path that sends results to stdout instead of a file.
pub const STDOUT_PATH: &str = "-";

/// Read a UTF-8 document, refusing files larger than `max_bytes`.
pub async fn read_document(path: &Path, max_bytes: u64) -> Result<String, SimcheckError> {
    let metadata = tokio::fs::metadata(path).await.map_err(|e| {
        SimcheckError::Input(format!("Cannot access {}: {}", path.display(), e))
    })?;

    if !metadata.is_file() {
        return Err(SimcheckError::Input(format!("Not a regular file: {}", path.display())));
    }
    if metadata.len() > max_bytes {
        return Err(SimcheckError::Input(format!(
            "{} is {} bytes, exceeding the {} byte limit",
            path.display(),
            metadata.len(),
            max_bytes
        )));
    }

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        SimcheckError::Input(format!("Cannot read {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Read document");
    Ok(content)
}

/// Write `content` to `path`, creating or truncating it. `-` writes to stdout.
pub async fn write_output(path: &Path, content: &str) -> Result<(), SimcheckError> {
    if path.as_os_str() == STDOUT_PATH {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(content.as_bytes()).await?;
        if !content.ends_with('\n') {
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;
        return Ok(());
    }

    tokio::fs::write(path, content).await.map_err(|e| {
        SimcheckError::Output(format!("Cannot write {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Wrote output");
    Ok(())
}
