use crate::runner;
use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "bookpress")]
#[command(about = "HTML booklet to PDF orchestrator (Chromium + WeasyPrint + wkhtmltopdf)")]
pub struct Args {
    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn dispatch(args: Args) -> Result<()> {
    init_logging(&args)?;
    runner::run()
}

fn init_logging(args: &Args) -> Result<()> {
    let level = args.log_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
