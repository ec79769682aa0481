use anyhow::{Context, Result};
use colored::Colorize;
use migcheck_check::Check;

use crate::utils::{load_project, verdict_badge};

/// Run the status check and print the verdict. Returns whether it passed.
pub fn cmd_check(json: bool) -> Result<bool> {
    let project = load_project()?;
    let check = project.status_check()?;
    let verdict = check.check()?;

    tracing::info!(
        label = check.label(),
        integration = %check.integration(),
        success = verdict.is_success(),
        "migration status checked"
    );

    if json {
        let report = serde_json::json!({
            "label": check.label(),
            "integration": check.integration(),
            "verdict": verdict,
        });
        let text = serde_json::to_string_pretty(&report).context("serialize verdict")?;
        println!("{text}");
    } else {
        println!(
            "{} {} {}",
            format!("{}:", check.label()).bright_cyan().bold(),
            verdict_badge(&verdict),
            verdict.message()
        );
    }

    Ok(verdict.is_success())
}
