use airline_data::*;

fn main() -> anyhow::Result<()> {
    // Read dataset name from command line
    let dataset = match std::env::args().nth(1) {
        Some(name) => name.parse::<Dataset>().map_err(anyhow::Error::msg)?,
        None => Dataset::default(),
    };

    let network = AirNetwork::load(dataset)?;

    for airport in network.get_airports() {
        println!(
            "{:<12} {:<32} {}, {} ({:.4}, {:.4})",
            airport.code, airport.name, airport.city, airport.country, airport.lat, airport.lon
        );
    }

    println!(
        "Dataset {} has {} locations and {} routes",
        network.dataset(),
        network.get_airports().len(),
        network.get_routes().len()
    );
    Ok(())
}
