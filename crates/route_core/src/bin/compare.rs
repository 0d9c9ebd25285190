use anyhow::Context;
use route_core::{prelude::*, statistics::NetworkStats, util::cli};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let g = Graph::from_dataset(cfg.dataset, &cfg.network)
        .with_context(|| format!("Failed to build the {} network", cfg.dataset))?;

    let comparison = run_comparison_with(&g, &cfg.source, &cfg.destination, cfg.comparison)
        .context("Failed to compare routes")?;
    let report = comparison.report(&g);

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", NetworkStats::new(&g));
        println!();
        println!("{}", report);
    }

    Ok(())
}
