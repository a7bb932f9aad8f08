use std::ffi::OsString;

use crate::command::Subcommand;
use crate::config::AppConfig;
use crate::error::DispatchError;
use crate::invocation::Invocation;
use crate::locate;
use crate::runner::{run_delegate, DelegatePlan};

/// A classified invocation with its delegate resolved on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    Help,
    Delegate(DelegatePlan),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Help,
    Completed { exit_code: i32 },
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Help => 0,
            Outcome::Completed { exit_code } => exit_code,
        }
    }
}

/// Classifies `argv` and resolves the delegate script. Nothing is spawned
/// here, so a missing script never reaches the process table.
pub fn prepare(argv: Vec<OsString>, cfg: &AppConfig) -> Result<Prepared, DispatchError> {
    match Invocation::parse(argv)? {
        Invocation::Help => Ok(Prepared::Help),
        Invocation::Delegate { command, rest } => {
            Ok(Prepared::Delegate(plan_delegate(command, rest, cfg)?))
        }
    }
}

/// Resolves the script for an already classified subcommand. Config is only
/// consulted here, so help and unknown commands never depend on it.
pub fn plan_delegate(
    command: Subcommand,
    rest: Vec<OsString>,
    cfg: &AppConfig,
) -> Result<DelegatePlan, DispatchError> {
    let dir = locate::scripts_dir(cfg)?;
    let script = locate::resolve_script(&dir, command)?;
    Ok(DelegatePlan::new(cfg.interpreter.clone(), script, rest))
}

pub async fn execute(prepared: &Prepared) -> Result<Outcome, DispatchError> {
    match prepared {
        Prepared::Help => Ok(Outcome::Help),
        Prepared::Delegate(plan) => {
            let exit_code = run_delegate(plan).await?;
            Ok(Outcome::Completed { exit_code })
        }
    }
}

/// `prepare` followed by `execute`.
pub async fn dispatch(argv: Vec<OsString>, cfg: &AppConfig) -> Result<Outcome, DispatchError> {
    let prepared = prepare(argv, cfg)?;
    execute(&prepared).await
}
