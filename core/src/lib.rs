pub mod api;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod invocation;
pub mod locate;
pub mod runner;
pub mod usage;
