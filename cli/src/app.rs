use std::error::Error as _;
use std::ffi::OsString;

use wechat_report_core::api as core_api;
use wechat_report_core::api::{DispatchError, Invocation, Outcome};

use crate::commands::cli::Args;

/// Runs one invocation and returns the process exit code.
pub async fn run_app(args: Args) -> i32 {
    match run(args.argv).await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => report_error(&err),
    }
}

async fn run(argv: Vec<OsString>) -> Result<Outcome, DispatchError> {
    let (command, rest) = match Invocation::parse(argv)? {
        Invocation::Help => {
            print!("{}", core_api::usage());
            return Ok(Outcome::Help);
        }
        Invocation::Delegate { command, rest } => (command, rest),
    };

    // Only the delegate path reads config.
    let cfg = core_api::load_default()?;
    let plan = core_api::plan_delegate(command, rest, &cfg)?;
    if cfg.echo_command {
        eprintln!("[{}] Executing: {plan}", core_api::PROGRAM_NAME);
    }

    let exit_code = core_api::run_delegate(&plan).await?;
    if exit_code != 0 {
        eprintln!("Process exited with code {exit_code}");
    }
    Ok(Outcome::Completed { exit_code })
}

fn report_error(err: &DispatchError) -> i32 {
    tracing::debug!(error = ?err, "dispatch failed");
    eprintln!("{err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
    if err.shows_usage() {
        print!("{}", core_api::usage());
    }
    err.exit_code()
}
