use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use migcheck_check::{MigrationStatusCheck, MigrationsHandle};
use migcheck_config::MigcheckConfig;
use migcheck_core::Verdict;
use migcheck_loader::{FileProject, load_config};

/// The project in the current directory.
pub struct Project {
    pub root: PathBuf,
    pub config: MigcheckConfig,
    pub files: Arc<FileProject>,
}

impl Project {
    /// Status check over this project, labelled from the config.
    pub fn status_check(&self) -> Result<MigrationStatusCheck> {
        let handle: Arc<dyn MigrationsHandle> = self.files.clone();
        let check = MigrationStatusCheck::new(handle)?.with_label(self.config.label());
        Ok(check)
    }
}

/// Load migcheck.json from the current directory and open the project it describes.
pub fn load_project() -> Result<Project> {
    let root = env::current_dir().context("resolve current directory")?;
    let config = load_config()?;
    let files = Arc::new(FileProject::new(&root, &config));
    Ok(Project {
        root,
        config,
        files,
    })
}

/// Colored PASS/FAIL badge for a verdict.
pub fn verdict_badge(verdict: &Verdict) -> ColoredString {
    if verdict.is_success() {
        "PASS".bright_green().bold()
    } else {
        "FAIL".bright_red().bold()
    }
}
