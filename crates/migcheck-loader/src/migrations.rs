use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use migcheck_config::{FileFormat, MigcheckConfig};
use migcheck_core::{AvailableMigration, AvailableMigrationsSet, MigrationDefinition, Version};
use serde::Deserialize;

/// Body of a migration definition file. Only the description is read; the
/// version comes from the file name.
#[derive(Debug, Default, Deserialize)]
struct MigrationFile {
    #[serde(default)]
    description: Option<String>,
}

/// Load the available migrations of the project rooted at `root`. The
/// configured history file is never read as a migration, even when it sits in
/// the migrations directory.
pub fn load_available_migrations(
    root: &Path,
    config: &MigcheckConfig,
) -> Result<AvailableMigrationsSet> {
    let history_file = root.join(config.history_file());
    load_migrations_from_dir(&root.join(config.migrations_dir()), Some(&history_file))
}

/// Load every migration definition in `dir`, sorted by version.
///
/// Each `.json`/`.yaml`/`.yml` file is one migration named by its file stem.
/// Dotfiles and `exclude` are skipped.
pub fn load_migrations_from_dir(
    dir: &Path,
    exclude: Option<&Path>,
) -> Result<AvailableMigrationsSet> {
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "migrations directory missing");
        return Ok(AvailableMigrationsSet::default());
    }

    let mut migrations: BTreeMap<Version, AvailableMigration> = BTreeMap::new();
    let entries = fs::read_dir(dir).context("read migrations directory")?;

    for entry in entries {
        let entry = entry.context("read directory entry")?;
        let path = entry.path();
        if !path.is_file() || exclude.is_some_and(|excluded| excluded == path) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.is_empty() || stem.starts_with('.') {
            continue;
        }
        let Some(format) = path
            .extension()
            .and_then(|s| s.to_str())
            .and_then(FileFormat::from_extension)
        else {
            continue;
        };

        let version = Version::from(stem);
        if let Some(existing) = migrations.get(&version) {
            let existing = existing
                .definition()
                .source
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            anyhow::bail!(
                "duplicate migration version {version}: {} and {}",
                existing,
                path.display()
            );
        }

        let definition = read_definition(&path, format)?;
        tracing::debug!(%version, path = %path.display(), "found migration");
        migrations.insert(version.clone(), AvailableMigration::new(version, definition));
    }

    Ok(migrations.into_values().collect())
}

fn read_definition(path: &Path, format: FileFormat) -> Result<MigrationDefinition> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read migration file: {}", path.display()))?;

    let file: MigrationFile = if content.trim().is_empty() {
        MigrationFile::default()
    } else if format.is_yaml() {
        serde_yaml::from_str(&content)
            .with_context(|| format!("parse migration: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("parse migration: {}", path.display()))?
    };

    Ok(MigrationDefinition {
        description: file.description,
        source: Some(path.to_path_buf()),
    })
}
