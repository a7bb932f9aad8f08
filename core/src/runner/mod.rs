pub mod exit;
mod plan;
mod run;

pub use plan::DelegatePlan;
pub use run::run_delegate;
