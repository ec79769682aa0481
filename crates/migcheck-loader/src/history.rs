use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use migcheck_config::{FileFormat, MigcheckConfig};
use migcheck_core::ExecutedMigrationsList;

/// Load the execution history of the project rooted at `root`.
pub fn load_executed_migrations(
    root: &Path,
    config: &MigcheckConfig,
) -> Result<ExecutedMigrationsList> {
    load_history_from_path(&root.join(config.history_file()), config.history_format())
}

/// Read a history file: a list of `{version, executedAt?, executionTime?}`
/// records. A missing file means nothing has been executed yet.
pub fn load_history_from_path(path: &Path, format: FileFormat) -> Result<ExecutedMigrationsList> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "history file missing");
        return Ok(ExecutedMigrationsList::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("read history file: {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(ExecutedMigrationsList::default());
    }

    let history: ExecutedMigrationsList = if format.is_yaml() {
        serde_yaml::from_str(&content)
            .with_context(|| format!("parse history: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("parse history: {}", path.display()))?
    };

    tracing::debug!(
        path = %path.display(),
        executed = history.len(),
        "loaded migration history"
    );
    Ok(history)
}
