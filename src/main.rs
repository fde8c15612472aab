mod check;
mod cli;
mod client;
mod config;
mod endpoint;
mod progress;
mod prompt;
mod results;
mod types;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use console::Style;

use cli::Cli;
use client::MapsClient;
use config::{Config, RESULTS_FILE};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let red = Style::new().red().bold();
    let green = Style::new().green().bold();

    let Some(credential) = prompt::read_credential(&mut io::stdin().lock(), &mut io::stdout())? else {
        eprintln!("{} API key must not be empty!", red.apply_to("Error:"));
        return Ok(());
    };

    let client = MapsClient::new(&config.base_url, credential, cli.verbose)?;
    let results = check::run_all(&client, &config).await;

    if prompt::confirm_save(&mut io::stdin().lock(), &mut io::stdout())? {
        results::write_json(&results, Path::new(RESULTS_FILE))?;
        println!("{} Results saved to {}", green.apply_to("✓"), RESULTS_FILE);
    }

    Ok(())
}
