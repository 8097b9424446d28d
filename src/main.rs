use std::env;
use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use hotel_booking::{HotelConfig, Shell, SystemClock};

const CONFIG_ENV: &str = "HOTEL_CONFIG";

fn main() -> Result<()> {
    // Logs go to stderr so the menu on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match env::args().nth(1).or_else(|| env::var(CONFIG_ENV).ok()) {
        Some(path) => HotelConfig::load(&path)
            .with_context(|| format!("failed to load hotel config from {}", path))?,
        None => HotelConfig::default(),
    };

    let hotel = config.build_hotel(Box::new(SystemClock));
    let stdin = io::stdin();
    let mut shell = Shell::new(hotel, config.currency_suffix, stdin.lock(), io::stdout());
    shell.run()?;

    Ok(())
}
