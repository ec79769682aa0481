use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use migcheck_config::{CONFIG_FILE_NAME, FileFormat, MigcheckConfig};

pub fn cmd_init(history_format: FileFormat) -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() {
        bail!("{CONFIG_FILE_NAME} already exists");
    }

    let config = MigcheckConfig::default().with_history_format(history_format);
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    fs::write(&path, json).context("write migcheck.json")?;
    println!("created {:?}", path);
    Ok(())
}
