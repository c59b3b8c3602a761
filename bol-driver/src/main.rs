use anyhow::{Context, Result};
use bol_driver::{ArtifactWriter, Driver, DriverConfig, HttpTransport};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bol_driver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DriverConfig::parse();

    let writer = ArtifactWriter::create(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;
    let transport = HttpTransport::new(config.url.clone(), config.timeout())
        .context("failed to build HTTP client")?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "Sending {} requests to {} (max {} attempts each)",
        config.iterations, config.url, config.max_attempts
    );

    let summary = Driver::new(transport, rng, writer, config.settings()).run()?;

    println!("Testing completed!");
    println!(
        "Generated: {} | Skipped: {} | Requests: {}",
        summary.succeeded, summary.skipped, summary.requests
    );

    Ok(())
}
