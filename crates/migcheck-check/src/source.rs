use std::sync::Arc;

use migcheck_core::{Integration, Version};

use crate::error::{CheckError, SourceError};
use crate::handle::{Configuration, DependencyFactory, LegacyConfiguration, MigrationsHandle};

/// Uniform access to the two version lists, whatever the handle shape.
pub trait MigrationSource: Send + Sync {
    fn integration(&self) -> Integration;
    fn list_available(&self) -> Result<Vec<Version>, SourceError>;
    fn list_applied(&self) -> Result<Vec<Version>, SourceError>;
}

pub struct RepositorySource {
    factory: Arc<dyn DependencyFactory>,
}

impl RepositorySource {
    pub fn new(factory: Arc<dyn DependencyFactory>) -> Self {
        Self { factory }
    }
}

impl MigrationSource for RepositorySource {
    fn integration(&self) -> Integration {
        Integration::Repository
    }

    fn list_available(&self) -> Result<Vec<Version>, SourceError> {
        let migrations = self.factory.migration_repository().migrations()?;
        Ok(migrations.versions())
    }

    fn list_applied(&self) -> Result<Vec<Version>, SourceError> {
        let executed = self.factory.metadata_storage().executed_migrations()?;
        Ok(executed.versions())
    }
}

pub struct ConfigurationSource {
    configuration: Arc<dyn Configuration>,
}

impl ConfigurationSource {
    pub fn new(configuration: Arc<dyn Configuration>) -> Self {
        Self { configuration }
    }
}

impl MigrationSource for ConfigurationSource {
    fn integration(&self) -> Integration {
        Integration::Configuration
    }

    fn list_available(&self) -> Result<Vec<Version>, SourceError> {
        self.configuration.available_versions()
    }

    fn list_applied(&self) -> Result<Vec<Version>, SourceError> {
        self.configuration.migrated_versions()
    }
}

pub struct LegacyConfigurationSource {
    configuration: Arc<dyn LegacyConfiguration>,
}

impl LegacyConfigurationSource {
    pub fn new(configuration: Arc<dyn LegacyConfiguration>) -> Self {
        Self { configuration }
    }
}

impl MigrationSource for LegacyConfigurationSource {
    fn integration(&self) -> Integration {
        Integration::Legacy
    }

    fn list_available(&self) -> Result<Vec<Version>, SourceError> {
        self.configuration.available_versions()
    }

    fn list_applied(&self) -> Result<Vec<Version>, SourceError> {
        self.configuration.migrated_versions()
    }
}

/// Pick the adapter for `handle`, probing shapes in precedence order:
/// repository, then configuration, then legacy configuration.
pub fn classify(handle: Arc<dyn MigrationsHandle>) -> Result<Box<dyn MigrationSource>, CheckError> {
    if let Some(factory) = Arc::clone(&handle).dependency_factory() {
        return Ok(Box::new(RepositorySource::new(factory)));
    }
    if let Some(configuration) = Arc::clone(&handle).configuration() {
        return Ok(Box::new(ConfigurationSource::new(configuration)));
    }
    if let Some(configuration) = handle.legacy_configuration() {
        return Ok(Box::new(LegacyConfigurationSource::new(configuration)));
    }
    Err(CheckError::InvalidArgument)
}
