//! Command-line interface.
//!
//! `serve` takes its flag defaults from the cached [`Config`]; `hello` has no
//! settings dependency at all; `info` prints every resolved settings field.
//! The global `--version` flag is handled by clap before any command runs.

use clap::{CommandFactory, Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::create_router;
use crate::config::Config;
use crate::utils::shutdown_signal;
use crate::APP_VERSION;

/// A small web service template CLI.
#[derive(Parser, Debug)]
#[command(name = "service-template")]
#[command(about = "A small web service template: axum API plus companion CLI")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Start the HTTP server.
    Serve {
        /// Host to bind to (defaults to the HOST setting).
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (defaults to the PORT setting).
        #[arg(short, long)]
        port: Option<u16>,

        /// Expect an external watcher to restart the server on change.
        #[arg(short, long)]
        reload: bool,
    },

    /// Say hello to someone.
    Hello {
        /// Name to greet.
        #[arg(default_value = "World")]
        name: String,
    },

    /// Show application information and resolved settings.
    Info,
}

/// Dispatch the parsed arguments. No arguments prints help and exits 0.
pub async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Serve { host, port, reload }) => cmd_serve(host, port, reload).await,
        Some(Command::Hello { name }) => {
            println!("{}", greeting(&name));
            Ok(())
        }
        Some(Command::Info) => cmd_info(),
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}

/// Start the HTTP server, with CLI flags overriding resolved settings.
async fn cmd_serve(host: Option<String>, port: Option<u16>, reload: bool) -> anyhow::Result<()> {
    let config = Config::get()?;

    let host = host.unwrap_or_else(|| config.host.clone());
    let port = port.unwrap_or(config.port);

    if reload || config.reload {
        warn!("reload requested: restarts are left to an external watcher (e.g. cargo-watch)");
    }

    let listener = TcpListener::bind((host.as_str(), port)).await?;
    info!("Starting server at http://{}:{}", host, port);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Print every settings field plus the static version.
fn cmd_info() -> anyhow::Result<()> {
    let config = Config::get()?;
    print!("{}", render_info(config));
    Ok(())
}

fn greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

fn render_info(config: &Config) -> String {
    let rows = [
        ("App Name", config.app_name.clone()),
        ("Version", APP_VERSION.to_string()),
        ("Configured Version", config.app_version.clone()),
        ("Debug", config.debug.to_string()),
        ("Host", config.host.clone()),
        ("Port", config.port.to_string()),
        ("Reload", config.reload.to_string()),
        ("Log Level", config.log_level.to_string()),
    ];

    let mut out = String::new();
    out.push_str("======================================\n");
    out.push_str("APPLICATION INFO\n");
    out.push_str("======================================\n");
    for (key, value) in rows {
        out.push_str(&format!("  {key:<20} {value}\n"));
    }
    out.push_str("======================================\n");
    out
}
