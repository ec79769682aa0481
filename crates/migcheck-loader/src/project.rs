use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use migcheck_check::{
    Configuration, DependencyFactory, LegacyConfiguration, MetadataStorage, MigrationsHandle,
    MigrationsRepository, SourceError,
};
use migcheck_config::{FileFormat, MigcheckConfig};
use migcheck_core::{AvailableMigrationsSet, ExecutedMigrationsList, Integration, Version};

use crate::config::load_config_or_default;
use crate::history::load_history_from_path;
use crate::migrations::load_migrations_from_dir;

/// Migration definitions stored as files in a directory.
#[derive(Debug, Clone)]
pub struct FileRepository {
    migrations_dir: PathBuf,
    exclude: Option<PathBuf>,
}

impl FileRepository {
    pub fn new(migrations_dir: impl Into<PathBuf>) -> Self {
        Self {
            migrations_dir: migrations_dir.into(),
            exclude: None,
        }
    }

    /// Skip `path` when scanning, e.g. a history file kept among the definitions.
    pub fn excluding(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude = Some(path.into());
        self
    }

    pub fn migrations_dir(&self) -> &Path {
        &self.migrations_dir
    }

    pub fn load(&self) -> Result<AvailableMigrationsSet> {
        load_migrations_from_dir(&self.migrations_dir, self.exclude.as_deref())
    }
}

impl MigrationsRepository for FileRepository {
    fn migrations(&self) -> Result<AvailableMigrationsSet, SourceError> {
        Ok(self.load()?)
    }
}

/// Execution history stored in a single JSON or YAML file.
#[derive(Debug, Clone)]
pub struct FileMetadataStorage {
    history_file: PathBuf,
    format: FileFormat,
}

impl FileMetadataStorage {
    pub fn new(history_file: impl Into<PathBuf>, format: FileFormat) -> Self {
        Self {
            history_file: history_file.into(),
            format,
        }
    }

    pub fn history_file(&self) -> &Path {
        &self.history_file
    }

    pub fn load(&self) -> Result<ExecutedMigrationsList> {
        load_history_from_path(&self.history_file, self.format)
    }
}

impl MetadataStorage for FileMetadataStorage {
    fn executed_migrations(&self) -> Result<ExecutedMigrationsList, SourceError> {
        Ok(self.load()?)
    }
}

/// A project on disk, exposed to the status check in the shape named by its
/// configuration.
#[derive(Debug, Clone)]
pub struct FileProject {
    integration: Integration,
    repository: FileRepository,
    storage: FileMetadataStorage,
}

impl FileProject {
    pub fn new(root: &Path, config: &MigcheckConfig) -> Self {
        let history_file = root.join(config.history_file());
        Self {
            integration: config.integration(),
            repository: FileRepository::new(root.join(config.migrations_dir()))
                .excluding(&history_file),
            storage: FileMetadataStorage::new(history_file, config.history_format()),
        }
    }

    /// Open the project at `root`, reading its config or falling back to defaults.
    pub fn open(root: &Path) -> Result<Self> {
        let config = load_config_or_default(Some(root))?;
        Ok(Self::new(root, &config))
    }

    pub fn integration(&self) -> Integration {
        self.integration
    }

    pub fn repository(&self) -> &FileRepository {
        &self.repository
    }

    pub fn storage(&self) -> &FileMetadataStorage {
        &self.storage
    }

    fn available(&self) -> Result<Vec<Version>, SourceError> {
        Ok(self.repository.load()?.versions())
    }

    fn migrated(&self) -> Result<Vec<Version>, SourceError> {
        Ok(self.storage.load()?.versions())
    }
}

impl DependencyFactory for FileProject {
    fn migration_repository(&self) -> &dyn MigrationsRepository {
        &self.repository
    }

    fn metadata_storage(&self) -> &dyn MetadataStorage {
        &self.storage
    }
}

impl Configuration for FileProject {
    fn available_versions(&self) -> Result<Vec<Version>, SourceError> {
        self.available()
    }

    fn migrated_versions(&self) -> Result<Vec<Version>, SourceError> {
        self.migrated()
    }
}

impl LegacyConfiguration for FileProject {
    fn available_versions(&self) -> Result<Vec<Version>, SourceError> {
        self.available()
    }

    fn migrated_versions(&self) -> Result<Vec<Version>, SourceError> {
        self.migrated()
    }
}

impl MigrationsHandle for FileProject {
    fn dependency_factory(self: Arc<Self>) -> Option<Arc<dyn DependencyFactory>> {
        if self.integration == Integration::Repository {
            Some(self)
        } else {
            None
        }
    }

    fn configuration(self: Arc<Self>) -> Option<Arc<dyn Configuration>> {
        if self.integration == Integration::Configuration {
            Some(self)
        } else {
            None
        }
    }

    fn legacy_configuration(self: Arc<Self>) -> Option<Arc<dyn LegacyConfiguration>> {
        if self.integration == Integration::Legacy {
            Some(self)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_resolves_paths_against_root() {
        let root = Path::new("/srv/app");
        let config = MigcheckConfig {
            migrations_dir: PathBuf::from("db/migrations"),
            history_file: PathBuf::from("db/history.yaml"),
            ..Default::default()
        }
        .with_history_format(FileFormat::Yaml);

        let project = FileProject::new(root, &config);

        assert_eq!(project.repository().migrations_dir(), root.join("db/migrations"));
        assert_eq!(project.storage().history_file(), root.join("db/history.yaml"));
        assert_eq!(project.integration(), Integration::Repository);
    }

    #[test]
    fn test_repository_excluding_skips_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("Version1.json"), "{}").unwrap();
        fs::write(dir.join("history.json"), "[]").unwrap();

        let all = FileRepository::new(dir).load().unwrap();
        assert_eq!(all.len(), 2);

        let filtered = FileRepository::new(dir)
            .excluding(dir.join("history.json"))
            .load()
            .unwrap();
        assert_eq!(filtered.versions(), vec![Version::from("Version1")]);
    }
}
