pub mod check;
pub mod error;
pub mod handle;
pub mod source;

pub use check::{Check, MigrationStatusCheck};
pub use error::{CheckError, SourceError};
pub use handle::{
    Configuration, DependencyFactory, LegacyConfiguration, MetadataStorage, MigrationsHandle,
    MigrationsRepository,
};
pub use source::{
    ConfigurationSource, LegacyConfigurationSource, MigrationSource, RepositorySource, classify,
};
