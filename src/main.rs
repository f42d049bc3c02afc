use anyhow::Result;
use bracket_eval::{cli::Cli, infra::logging::env_filter};
use clap::Parser;

fn main() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();
    cli.run()
}
