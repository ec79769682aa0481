use anyhow::Result;
use chrono::SecondsFormat;
use colored::Colorize;
use migcheck_check::Check;
use migcheck_core::join_versions;

use crate::utils::{load_project, verdict_badge};

pub fn cmd_status() -> Result<()> {
    let project = load_project()?;
    let config = &project.config;
    let available = project.files.repository().load()?;
    let executed = project.files.storage().load()?;

    println!("{}", "Configuration:".bright_cyan().bold());
    println!(
        "  {} {}",
        "Project root:".cyan(),
        format!("{}", project.root.display()).bright_white()
    );
    println!(
        "  {} {}",
        "Migrations directory:".cyan(),
        format!("{}", project.files.repository().migrations_dir().display()).bright_white()
    );
    println!(
        "  {} {}",
        "History file:".cyan(),
        format!("{}", project.files.storage().history_file().display()).bright_white()
    );
    println!(
        "  {} {}",
        "History format:".cyan(),
        config.history_format().extension().bright_white()
    );
    println!(
        "  {} {}",
        "Integration:".cyan(),
        config.integration().as_str().bright_white()
    );
    println!();

    println!(
        "{} {}",
        "Available migrations:".bright_cyan().bold(),
        available.len().to_string().bright_yellow()
    );
    for migration in available.iter() {
        print!("  {} {}", "-".bright_white(), migration.version().as_str().bright_green());
        if let Some(description) = &migration.definition().description {
            println!(" {}", description.bright_black());
        } else {
            println!();
        }
    }
    println!();

    println!(
        "{} {}",
        "Executed migrations:".bright_cyan().bold(),
        executed.len().to_string().bright_yellow()
    );
    if let Some(latest) = executed.latest() {
        println!(
            "  {} {}",
            "Latest version:".cyan(),
            latest.version().as_str().bright_magenta()
        );
        if let Some(executed_at) = &latest.executed_at {
            println!(
                "  {} {}",
                "Latest executed at:".cyan(),
                executed_at
                    .to_rfc3339_opts(SecondsFormat::Secs, true)
                    .bright_white()
            );
        }
        if let Some(execution_time) = latest.execution_time {
            println!(
                "  {} {}",
                "Latest execution time:".cyan(),
                format!("{execution_time}ms").bright_white()
            );
        }
    }
    println!();

    let check = project.status_check()?;
    let verdict = check.check()?;
    println!(
        "{} {} {}",
        format!("{}:", check.label()).bright_cyan().bold(),
        verdict_badge(&verdict),
        verdict.message().bright_white()
    );
    if let Some(drift) = verdict.drift() {
        if !drift.pending.is_empty() {
            println!(
                "  {} {}",
                "Pending:".yellow(),
                join_versions(&drift.pending).bright_white()
            );
        }
        if !drift.orphaned.is_empty() {
            println!(
                "  {} {}",
                "Orphaned:".red(),
                join_versions(&drift.orphaned).bright_white()
            );
        }
    }

    Ok(())
}
