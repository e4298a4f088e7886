//! `podium patch` — apply credentials through the jury form channel.

use std::path::PathBuf;

use clap::Args;

use podium_judge::{JudgeClient, JuryClient};
use podium_provision::{artifacts, PatchAgent};

use crate::config::Config;
use crate::error::CliResult;
use crate::output;

/// Arguments for the patch command
#[derive(Args, Debug)]
pub struct PatchArgs {
    /// Created-accounts artifact to read (defaults to the provisioning output)
    #[arg(long)]
    pub input: Option<PathBuf>,
}

pub async fn execute(args: PatchArgs) -> CliResult<()> {
    let config = Config::from_env()?;

    let input = args
        .input
        .unwrap_or_else(|| artifacts::created_path(&config.roster_dir));
    let users = artifacts::read_created(&input)?;
    output::print_info(&format!(
        "Patching {} users from {}",
        users.len(),
        input.display()
    ));

    let api = JudgeClient::new(
        config.api_base.clone(),
        config.api_username.clone(),
        config.api_password.clone(),
        config.timeout,
    )?;
    let jury = JuryClient::new(
        config.api_base.clone(),
        config.session_cookie.clone(),
        config.timeout,
    )?;

    let summary = PatchAgent::new(&api, &jury).run(&users).await;

    println!();
    output::print_key_value("Succeeded", &summary.succeeded.to_string());
    output::print_key_value("Failed", &summary.failed.to_string());

    if summary.failed == 0 {
        output::print_success("All users patched.");
    } else {
        output::print_warning("Some users failed; fix the cause and re-run the patch pass.");
    }

    Ok(())
}
