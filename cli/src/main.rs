mod app;
mod commands;
use commands::cli;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("warning: logging disabled: {e:#}");
    }

    let args = cli::Args::parse_raw(std::env::args_os());
    let exit = app::run_app(args).await;
    std::process::exit(exit);
}

/// Logs go to stderr so the delegate owns stdout. `RUST_LOG` wins over the
/// `warn` default.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
