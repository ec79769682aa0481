use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use migcheck_config::{CONFIG_FILE_NAME, MigcheckConfig};

/// Load migcheck.json config from current directory.
pub fn load_config() -> Result<MigcheckConfig> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if !path.exists() {
        anyhow::bail!("{CONFIG_FILE_NAME} not found. Run 'migcheck init' first.");
    }

    load_config_from_path(&path)
}

/// Load config from a specific path.
pub fn load_config_from_path(path: &Path) -> Result<MigcheckConfig> {
    if !path.exists() {
        anyhow::bail!("{CONFIG_FILE_NAME} not found at: {}", path.display());
    }

    tracing::debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path).context("read migcheck.json")?;
    let config: MigcheckConfig = serde_json::from_str(&content).context("parse migcheck.json")?;
    Ok(config)
}

/// Load config from project root, with fallback to defaults.
pub fn load_config_or_default(project_root: Option<&Path>) -> Result<MigcheckConfig> {
    let config_path = match project_root {
        Some(root) => root.join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    };

    if config_path.exists() {
        load_config_from_path(&config_path)
    } else {
        Ok(MigcheckConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migcheck_core::Integration;
    use tempfile::TempDir;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_or_default(Some(temp_dir.path())).unwrap();
        assert_eq!(config, MigcheckConfig::default());
    }

    #[test]
    fn reads_config_from_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{"migrationsDir": "db", "integration": "configuration"}"#,
        )
        .unwrap();

        let config = load_config_or_default(Some(temp_dir.path())).unwrap();
        assert_eq!(config.migrations_dir(), Path::new("db"));
        assert_eq!(config.integration(), Integration::Configuration);
    }

    #[test]
    fn invalid_config_reports_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("parse migcheck.json"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config_from_path(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap_err();
        assert!(err.to_string().contains("not found at"));
    }
}
