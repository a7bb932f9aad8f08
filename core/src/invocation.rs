use std::ffi::OsString;

use crate::command::Subcommand;
use crate::error::DispatchError;

/// What a single run of the dispatcher has been asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Delegate {
        command: Subcommand,
        /// Everything after the subcommand, untouched.
        rest: Vec<OsString>,
    },
}

impl Invocation {
    /// Classifies the argument list (program name excluded).
    pub fn parse(mut argv: Vec<OsString>) -> Result<Self, DispatchError> {
        if argv.is_empty() {
            return Ok(Invocation::Help);
        }
        let first = argv.remove(0);
        let name = first.to_string_lossy();
        if name == "--help" || name == "-h" {
            return Ok(Invocation::Help);
        }

        // Non-UTF-8 names cannot match a table row, so they fall through to
        // the unknown-command path with a lossy rendering.
        let command = first
            .to_str()
            .and_then(Subcommand::from_name)
            .ok_or_else(|| DispatchError::UnknownCommand(name.into_owned()))?;

        tracing::debug!(%command, args = argv.len(), "classified invocation");
        Ok(Invocation::Delegate {
            command,
            rest: argv,
        })
    }
}
