pub mod drift;
pub mod integration;
pub mod migration;
pub mod verdict;
pub mod version;

pub use drift::{MigrationDrift, join_versions};
pub use integration::Integration;
pub use migration::{
    AvailableMigration, AvailableMigrationsSet, ExecutedMigration, ExecutedMigrationsList,
    MigrationDefinition,
};
pub use verdict::{ALL_MIGRATIONS_DONE, DEFAULT_LABEL, Verdict};
pub use version::Version;
