pub mod config;
pub mod file_format;

pub use config::{CONFIG_FILE_NAME, MigcheckConfig};
pub use file_format::FileFormat;
