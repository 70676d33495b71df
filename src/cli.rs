use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::{ConfigOverrides, DEFAULT_CONFIG_FILE, ServerConfig};
use commands::{print_config, serve};

#[derive(Parser)]
#[command(name = "stockcast")]
#[command(about = "Stock forecast dashboard server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard server
    Serve(ConfigArgs),
    /// Print the resolved configuration
    Config(ConfigArgs),
}

/// Configuration sources shared by all subcommands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Configuration file without extension
    ///
    /// Any format known to the `config` crate works, e.g. stockcast.toml.
    /// A missing file is not an error.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Bind address for the web server
    ///
    /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
    #[arg(short, long)]
    pub bind_address: Option<String>,

    /// Base URL of the analysis service (e.g., http://127.0.0.1:5000)
    #[arg(short, long)]
    pub upstream_url: Option<String>,

    /// Directory with the built frontend
    #[arg(short, long)]
    pub static_dir: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn resolve(self) -> Result<ServerConfig> {
        ServerConfig::load(
            &self.config,
            ConfigOverrides {
                bind_address: self.bind_address,
                upstream_url: self.upstream_url,
                static_dir: self.static_dir,
            },
        )
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => {
                serve(args.resolve()?).await?;
            }
            Commands::Config(args) => {
                print_config(&args.resolve()?)?;
            }
        }
        Ok(())
    }
}
