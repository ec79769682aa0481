//! Capability surface of a migrations handle.
//!
//! A handle advertises which integration shape it supports by overriding one
//! of the capability methods on [`MigrationsHandle`] and returning itself as the
//! matching capability. They default to `None`, so a handle that overrides
//! nothing is rejected by the status check.

use std::sync::Arc;

use migcheck_core::{AvailableMigrationsSet, ExecutedMigrationsList, Version};

use crate::error::SourceError;

/// Lists every migration known to the target system.
pub trait MigrationsRepository: Send + Sync {
    fn migrations(&self) -> Result<AvailableMigrationsSet, SourceError>;
}

/// Lists the migrations recorded as executed.
pub trait MetadataStorage: Send + Sync {
    fn executed_migrations(&self) -> Result<ExecutedMigrationsList, SourceError>;
}

/// Repository shape: a factory handing out the repository and the metadata storage.
pub trait DependencyFactory: Send + Sync {
    fn migration_repository(&self) -> &dyn MigrationsRepository;
    fn metadata_storage(&self) -> &dyn MetadataStorage;
}

/// Configuration shape: plain version lists.
pub trait Configuration: Send + Sync {
    fn available_versions(&self) -> Result<Vec<Version>, SourceError>;
    fn migrated_versions(&self) -> Result<Vec<Version>, SourceError>;
}

/// Legacy configuration shape. Same accessors as [`Configuration`].
pub trait LegacyConfiguration: Send + Sync {
    fn available_versions(&self) -> Result<Vec<Version>, SourceError>;
    fn migrated_versions(&self) -> Result<Vec<Version>, SourceError>;
}

/// Handle to a migrations system, queried for its integration shape.
pub trait MigrationsHandle: Send + Sync {
    fn dependency_factory(self: Arc<Self>) -> Option<Arc<dyn DependencyFactory>> {
        None
    }

    fn configuration(self: Arc<Self>) -> Option<Arc<dyn Configuration>> {
        None
    }

    fn legacy_configuration(self: Arc<Self>) -> Option<Arc<dyn LegacyConfiguration>> {
        None
    }
}
