pub mod config;
pub mod history;
pub mod migrations;
pub mod project;

pub use config::{load_config, load_config_from_path, load_config_or_default};
pub use history::{load_executed_migrations, load_history_from_path};
pub use migrations::{load_available_migrations, load_migrations_from_dir};
pub use project::{FileMetadataStorage, FileProject, FileRepository};
