use airline_data::Dataset;
use clap::Parser;

use crate::params::{ComparisonParams, NetworkParams};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Code of the departure location, e.g. JFK
    source: String,

    /// Code of the arrival location, e.g. LHR
    destination: String,

    /// Network to search in. Possible values are "aviation" and "regional"
    #[arg(short, long, default_value_t = Dataset::Aviation)]
    dataset: Dataset,

    /// Seed for the generated fares and layovers
    #[arg(short, long, value_name = "seed")]
    seed: Option<u64>,

    /// Penalty per hour of layover used for the cheapest route
    #[arg(short, long, value_name = "rate", value_parser = parse_rate)]
    layover_rate: Option<f64>,

    /// Run the algorithms on separate threads
    #[arg(short, long)]
    parallel: bool,

    /// Print the comparison as JSON
    #[arg(long)]
    json: bool,
}

fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|_| format!("`{}` is not a number", s))?;
    if !rate.is_finite() {
        return Err(format!("rate must be finite, got `{}`", s));
    }
    Ok(rate)
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub dataset: Dataset,
    pub network: NetworkParams,
    pub comparison: ComparisonParams,
    pub json: bool,
    pub source: String,
    pub destination: String,
}

pub fn parse() -> Cfg {
    let cli = Cli::parse();

    let mut network = NetworkParams::default();
    if let Some(seed) = cli.seed {
        network = network.seed(seed);
    }

    let mut comparison = ComparisonParams::new().parallel(cli.parallel);
    if let Some(rate) = cli.layover_rate {
        comparison = comparison.layover_rate(rate);
    }

    Cfg {
        dataset: cli.dataset,
        network,
        comparison,
        json: cli.json,
        source: cli.source,
        destination: cli.destination,
    }
}
