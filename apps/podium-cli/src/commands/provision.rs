//! `podium provision` — reconcile the roster and create missing accounts.

use std::io::IsTerminal;

use clap::Args;
use dialoguer::Confirm;

use podium_judge::JudgeClient;
use podium_provision::{artifacts, DirectorySnapshot, Executor, ProvisionPlan};

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output;

/// Arguments for the provision command
#[derive(Args, Debug)]
pub struct ProvisionArgs {
    /// Plan and preview without creating anything remotely
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub async fn execute(args: ProvisionArgs) -> CliResult<()> {
    let config = Config::from_env()?;

    let roster_path = config.roster_path();
    output::print_info(&format!("Reading roster from {}", roster_path.display()));
    let roster = podium_roster::read_roster(&roster_path)?;

    let client = JudgeClient::new(
        config.api_base.clone(),
        config.api_username.clone(),
        config.api_password.clone(),
        config.timeout,
    )?;

    // The snapshot is the baseline for the whole run; it is never refreshed
    // mid-run and the plan is not re-diffed after confirmation.
    let mut snapshot = DirectorySnapshot::fetch(&client, &config.contest_id).await?;
    let plan = ProvisionPlan::build(&roster, &snapshot);

    let preview = artifacts::write_preview(&config.roster_dir, &plan)?;
    output::print_info(&format!(
        "{} new teams to create (preview saved to {})",
        plan.len(),
        preview.display()
    ));

    if plan.is_empty() {
        output::print_success("Directory already matches the roster; nothing to create.");
        return Ok(());
    }

    if !args.dry_run && !args.yes && !confirm_execution(plan.len())? {
        println!("Cancelled.");
        return Ok(());
    }

    let executor = Executor::new(&client, &config.contest_id, args.dry_run);
    let report = executor.run(&plan, &mut snapshot).await;

    let created = artifacts::write_created(&config.roster_dir, &report.created)?;

    output::print_success(&format!(
        "Created {} accounts (saved to {})",
        report.created.len(),
        created.display()
    ));
    if report.failed > 0 {
        output::print_warning(&format!(
            "{} records failed; check the log and re-run to retry them",
            report.failed
        ));
    }
    if args.dry_run {
        output::print_info("Dry-run: no remote changes were made.");
    }

    Ok(())
}

/// The single yes/no gate between planning and execution.
fn confirm_execution(count: usize) -> CliResult<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Validation(
            "Cannot confirm in non-interactive mode. Use --yes to skip the prompt.".to_string(),
        ));
    }

    Confirm::new()
        .with_prompt(format!("Create these {count} teams and users?"))
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(e.to_string()))
}
