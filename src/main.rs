use anyhow::{Context, Result};
use stain_area::config::SessionConfig;
use stain_area::core::UniformSampler;
use stain_area::estimation::MonteCarloEstimator;
use stain_area::history::ResultStore;
use stain_area::ui::cli::Session;
use stain_area::ui::cli::drivers::InquireDriver;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::load(&path)
            .with_context(|| format!("loading session config from {path}"))?,
        None => SessionConfig::default(),
    };

    let sampler = UniformSampler::from_seed_option(config.seed);
    match sampler.seed() {
        Some(seed) => info!(seed, "sampling with a fixed seed"),
        None => info!("sampling with OS entropy"),
    }

    let store = ResultStore::new();
    let mut session = Session::new(
        &InquireDriver,
        MonteCarloEstimator::new(sampler),
        &store,
        config,
        io::stdout(),
    );
    session.run()?;

    info!(results = store.len(), "session finished");
    Ok(())
}
