use std::borrow::Cow;
use std::path::Path;

use tracing::{debug, warn};

use super::Target;
use crate::error::SourceError;

/// Reads one target per line from `path`.
///
/// The whole file is read before any probing starts, so an unreadable file
/// aborts the run with nothing probed. Line content is not required to be
/// UTF-8.
///
/// # Errors
///
/// Returns `SourceError::Read` when the file cannot be opened or read.
pub fn load_targets(path: &Path) -> Result<Vec<Target>, SourceError> {
    let content = std::fs::read(path).map_err(|err| SourceError::Read {
        path: path.to_path_buf(),
        source: err,
    })?;
    let targets = parse_targets(&content);
    debug!("Loaded {} targets from {}", targets.len(), path.display());
    Ok(targets)
}

/// Splits raw file content into targets: one per line, trimmed, blank lines
/// skipped. Invalid UTF-8 sequences are replaced rather than rejected.
#[must_use]
pub fn parse_targets(content: &[u8]) -> Vec<Target> {
    content
        .split(|byte| *byte == b'\n')
        .filter_map(|line| {
            let text = String::from_utf8_lossy(line);
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            if matches!(text, Cow::Owned(_)) {
                warn!("Target line is not valid UTF-8, using {:?}", trimmed);
            }
            Some(Target::new(trimmed))
        })
        .collect()
}
