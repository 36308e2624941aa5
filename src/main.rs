//! Service entry point.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use service_template::cli::{self, Args};
use service_template::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments; --version/-V and usage errors exit here.
    let args = Args::parse();

    // Initialize logging. RUST_LOG wins; otherwise the resolved LOG_LEVEL
    // (or DEBUG) setting picks the filter. A failing resolution falls back
    // to "info" here so commands without a settings dependency still work;
    // the error itself surfaces when a command resolves settings for real.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = Config::get()
            .map(|config| config.log_filter())
            .unwrap_or_else(|_| "info".to_string());
        EnvFilter::new(directive)
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    cli::run(args).await
}
