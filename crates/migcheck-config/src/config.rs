use std::path::{Path, PathBuf};

use migcheck_core::{DEFAULT_LABEL, Integration};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::file_format::FileFormat;

/// File name of the project configuration.
pub const CONFIG_FILE_NAME: &str = "migcheck.json";

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_migrations_dir() -> PathBuf {
    PathBuf::from("migrations")
}

fn default_history_file() -> PathBuf {
    PathBuf::from("migrations/.history.json")
}

/// Top-level migcheck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MigcheckConfig {
    /// Directory holding one definition file per migration.
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: PathBuf,
    /// File recording which migrations have been executed.
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,
    #[serde(default)]
    pub history_format: FileFormat,
    /// Handle shape the project exposes to the status check.
    #[serde(default)]
    pub integration: Integration,
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for MigcheckConfig {
    fn default() -> Self {
        Self {
            migrations_dir: default_migrations_dir(),
            history_file: default_history_file(),
            history_format: FileFormat::Json,
            integration: Integration::Repository,
            label: default_label(),
        }
    }
}

impl MigcheckConfig {
    /// Path where migration definitions are stored.
    pub fn migrations_dir(&self) -> &Path {
        &self.migrations_dir
    }

    /// Path of the executed-migrations history.
    pub fn history_file(&self) -> &Path {
        &self.history_file
    }

    pub fn history_format(&self) -> FileFormat {
        self.history_format
    }

    pub fn integration(&self) -> Integration {
        self.integration
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Switch the history format, renaming the default history file to match.
    pub fn with_history_format(mut self, format: FileFormat) -> Self {
        if self.history_file == default_history_file() {
            self.history_file = self.history_file.with_extension(format.extension());
        }
        self.history_format = format;
        self
    }
}
