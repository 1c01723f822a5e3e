use std::path::PathBuf;

use clap::Parser;

/// Bistro order assistant gateway
#[derive(Debug, Parser)]
#[command(name = "bistro", about = "Restaurant lookup, menu scanning and a persona ordering chat")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "bistro.toml", env = "BISTRO_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "BISTRO_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter directive, used when `RUST_LOG` is unset
    #[arg(long, default_value = "info", env = "BISTRO_LOG")]
    pub log: String,
}
