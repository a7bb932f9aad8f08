use std::process::Stdio;

use tokio::process::Command;

use super::exit::normalize_exit;
use super::plan::DelegatePlan;
use crate::error::DispatchError;

/// Spawns the delegate with inherited stdio and waits for it to finish.
///
/// Returns the child's normalized exit code; only failures to start or to
/// wait on the child are errors.
pub async fn run_delegate(plan: &DelegatePlan) -> Result<i32, DispatchError> {
    let mut child = Command::new(&plan.program)
        .args(plan.argv())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| DispatchError::Spawn {
            program: plan.program.clone(),
            source,
        })?;

    tracing::info!(pid = ?child.id(), program = %plan.program, script = %plan.script_name(), "delegate started");

    let status = child.wait().await.map_err(|source| DispatchError::Wait {
        program: plan.program.clone(),
        source,
    })?;
    let code = normalize_exit(status);

    // Non-zero codes are reported to the user by the binary.
    tracing::info!(exit_code = code, "delegate finished");
    Ok(code)
}
