//! keeppt - dashboard shell preview server and inspection CLI

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keeppt_core::{ShellConfig, UserId};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "keeppt",
    version,
    about = "keeppt dashboard shell",
    long_about = "Serve the keeppt web frontend and inspect the shell configuration.\n\
                  \n\
                  Examples:\n\
                    keeppt serve                     # Serve crates/keeppt-web/dist on :3333\n\
                    keeppt serve --port 8080         # Custom port\n\
                    keeppt routes                    # Sidebar navigation table\n\
                    keeppt routes --json             # Same, as JSON\n\
                    keeppt avatar u123               # Avatar URL for a user id\n\
                  \n\
                  Frontend build:\n\
                    cd crates/keeppt-web && trunk build --release\n\
                  \n\
                  Environment Variables:\n\
                    KEEPPT_CONFIG                    # Shell config TOML file (avatar)\n\
                    KEEPPT_SHELL_CONFIG              # Frontend config TOML text, baked in by trunk build\n\
                    KEEPPT_PORT                      # Preview server port\n\
                    KEEPPT_DIST                      # Built frontend directory\n\
                    KEEPPT_NO_COLOR                  # Disable ANSI colors\n\
                    RUST_LOG                         # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Shell config TOML for `avatar` (defaults apply when omitted). The served
    /// frontend takes its config at build time from KEEPPT_SHELL_CONFIG.
    #[arg(long, global = true, env = "KEEPPT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "KEEPPT_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the built frontend
    Serve {
        /// Port for the preview server
        #[arg(long, env = "KEEPPT_PORT", default_value = "3333")]
        port: u16,
        /// Directory produced by `trunk build`
        #[arg(long, env = "KEEPPT_DIST", default_value = "crates/keeppt-web/dist")]
        dist: PathBuf,
    },
    /// Print the sidebar navigation entries
    Routes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the avatar URL for a user id
    Avatar {
        /// Stored user id; omitted means no id was stored
        user_id: Option<String>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ShellConfig> {
    match path {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("Failed to load shell config from {}", path.display())),
        None => Ok(ShellConfig::default()),
    }
}

impl Mode {
    /// Only `avatar` reads the shell config; the frontend's is baked in at build time
    fn uses_config(&self) -> bool {
        matches!(self, Mode::Avatar { .. })
    }
}

fn resolve_config(mode: &Mode, path: Option<&PathBuf>) -> Result<ShellConfig> {
    if mode.uses_config() {
        load_config(path)
    } else {
        Ok(ShellConfig::default())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = resolve_config(&cli.mode, cli.config.as_ref())?;
    debug!(?config, "shell config");

    match cli.mode {
        Mode::Serve { port, dist } => {
            keeppt_web::run(dist, port).await?;
        }
        Mode::Routes { json } => {
            if json {
                println!("{}", cli::routes_json()?);
            } else {
                println!("{}", cli::routes_table(cli.no_color));
            }
        }
        Mode::Avatar { user_id } => {
            let user_id = user_id.map(UserId::new);
            println!("{}", cli::avatar_line(&config, user_id.as_ref()));
        }
    }

    Ok(())
}
