use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gmaps-smoke",
    version,
    about = "Smoke-test the Geocoding, Places, Directions and Distance Matrix endpoints with one request each"
)]
pub struct Cli {
    /// Print each request URL (API key redacted) and HTTP status to stderr
    #[arg(long)]
    pub verbose: bool,

    /// TOML file overriding the service root and sample queries
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the service root (e.g. a local stub server)
    #[arg(long, env = "GMAPS_BASE_URL", hide = true)]
    pub base_url: Option<String>,
}
