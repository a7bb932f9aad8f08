//! Stable re-exports for the `cli` crate.
//!
//! Prefer importing from `wechat_report_core::api` instead of reaching into internal modules.

pub use crate::command::{CommandSpec, Subcommand, COMMANDS};
pub use crate::config::{load_default, AppConfig};
pub use crate::dispatch::{dispatch, execute, plan_delegate, prepare, Outcome, Prepared};
pub use crate::error::{ConfigError, DispatchError};
pub use crate::invocation::Invocation;
pub use crate::runner::{run_delegate, DelegatePlan};
pub use crate::usage::{usage, PROGRAM_NAME};
