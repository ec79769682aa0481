use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use migcheck_config::MigcheckConfig;
use migcheck_core::{ExecutedMigrationsList, Verdict};
use schemars::schema_for;

pub fn cmd_schema(out: PathBuf) -> Result<()> {
    if !out.exists() {
        fs::create_dir_all(&out).with_context(|| format!("create dir {}", out.display()))?;
    }

    let schemas = [
        ("config.schema.json", schema_for!(MigcheckConfig)),
        ("history.schema.json", schema_for!(ExecutedMigrationsList)),
        ("verdict.schema.json", schema_for!(Verdict)),
    ];

    println!("Wrote schemas:");
    for (name, schema) in schemas {
        let path = out.join(name);
        let text = serde_json::to_string_pretty(&schema)
            .with_context(|| format!("serialize {name}"))?;
        fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;
        println!("  {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cmd_schema_creates_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("schemas");

        assert!(!out.exists());
        cmd_schema(out.clone()).unwrap();
        assert!(out.join("config.schema.json").exists());
        assert!(out.join("history.schema.json").exists());
        assert!(out.join("verdict.schema.json").exists());
    }

    #[test]
    fn config_schema_names_integration_values() {
        let temp_dir = TempDir::new().unwrap();
        cmd_schema(temp_dir.path().to_path_buf()).unwrap();

        let text = fs::read_to_string(temp_dir.path().join("config.schema.json")).unwrap();
        assert!(text.contains("migrationsDir"));
        assert!(text.contains("legacy"));
    }
}
