//! Interactive shell to query a generated network
use std::path::PathBuf;

use airline_data::Dataset;
use reedline_repl_rs::clap::{Arg, ArgAction, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::{
    comparison::{all_pairs_fastest, cheapest_path, run_comparison, shortest_path},
    graph::{Graph, NodeIndex},
    objective::Objective,
    params::NetworkParams,
    result::PathResult,
    search::floyd_warshall::AllPairs,
    statistics::{average_out_degree, NetworkStats},
};

/// Command history, relative to the working directory
const HISTORY_FILE: &str = "history";

struct Context {
    graph: Graph,
    /// Computed on the first `fastest` query
    all_pairs: Option<AllPairs>,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self {
            graph,
            all_pairs: None,
        }
    }

    /// Resolves the `src` and `dst` arguments to node indices
    fn endpoints(&self, args: &ArgMatches) -> std::result::Result<(NodeIndex, NodeIndex), String> {
        let resolve = |name: &str| -> std::result::Result<NodeIndex, String> {
            let code = args.get_one::<String>(name).map_or("", |c| c.as_str());
            self.graph.resolve(code).map_err(|err| err.to_string())
        };
        Ok((resolve("src")?, resolve("dst")?))
    }
}

fn format_result(g: &Graph, result: &PathResult) -> String {
    let Some(metrics) = result.metrics() else {
        return format!("No path found\nTook: {:?}", result.duration);
    };

    format!(
        "{}\n{}: {:.2}\nDistance: {:.2} km, Time: {:.2} h, Cost: {:.2}, Layover: {:.1} h, Hops: {}\n{}\nTook: {:?}",
        result.ids(g).join(" -> "),
        result.details.objective,
        result.weight,
        metrics.total_distance,
        metrics.total_time,
        metrics.total_cost,
        metrics.total_layover,
        metrics.hops,
        result.details.counters,
        result.duration
    )
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} nodes and {} edges, {:.2} outgoing edges per node",
        context.graph.num_nodes(),
        context.graph.num_edges(),
        average_out_degree(&context.graph)
    )))
}

fn stats(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(NetworkStats::new(&context.graph).to_string()))
}

fn airports(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut res = String::new();
    for node in context.graph.nodes() {
        match &node.location {
            Some(location) => res.push_str(&format!(
                "{:<12}{} ({}, {})\n",
                node.id, location.name, location.city, location.country
            )),
            None => res.push_str(&format!("{}\n", node.id)),
        }
    }
    Ok(Some(res))
}

fn compare(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = args.get_one::<String>("src").map_or("", |c| c.as_str());
    let dst = args.get_one::<String>("dst").map_or("", |c| c.as_str());

    let comparison = match run_comparison(&context.graph, src, dst) {
        Ok(comparison) => comparison,
        Err(err) => return Ok(Some(format!("Error: {}", err))),
    };
    let report = comparison.report(&context.graph);

    if args.get_flag("json") {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => Ok(Some(json)),
            Err(err) => Ok(Some(format!("Error: {}", err))),
        }
    } else {
        Ok(Some(report.to_string()))
    }
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (s, t) = match context.endpoints(&args) {
        Ok(endpoints) => endpoints,
        Err(err) => return Ok(Some(format!("Error: {}", err))),
    };

    match shortest_path(&context.graph, s, t, Objective::Distance) {
        Ok(result) => Ok(Some(format_result(&context.graph, &result))),
        Err(err) => Ok(Some(format!("Error: {}", err))),
    }
}

fn run_cheapest(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (s, t) = match context.endpoints(&args) {
        Ok(endpoints) => endpoints,
        Err(err) => return Ok(Some(format!("Error: {}", err))),
    };

    match cheapest_path(&context.graph, s, t) {
        Ok(result) => Ok(Some(format_result(&context.graph, &result))),
        Err(err) => Ok(Some(format!("Error: {}", err))),
    }
}

fn run_fastest(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (s, t) = match context.endpoints(&args) {
        Ok(endpoints) => endpoints,
        Err(err) => return Ok(Some(format!("Error: {}", err))),
    };

    let all_pairs = context
        .all_pairs
        .get_or_insert_with(|| all_pairs_fastest(&context.graph));
    let sp = match all_pairs.path(s, t) {
        Ok(sp) => sp,
        Err(err) => return Ok(Some(format!("Error: {}", err))),
    };

    if !sp.is_reachable() {
        return Ok(Some("No path found".to_string()));
    }
    let codes: Vec<&str> = sp.nodes.iter().map(|n| context.graph.id(*n)).collect();
    Ok(Some(format!(
        "{}\nFastest Time: {:.2} h",
        codes.join(" -> "),
        sp.weight
    )))
}

fn route_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .arg(
            Arg::new("src")
                .required(true)
                .help("Code of the source location"),
        )
        .arg(
            Arg::new("dst")
                .required(true)
                .help("Code of the destination location"),
        )
        .about(about)
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let dataset = match std::env::args().nth(1).map(|arg| arg.parse::<Dataset>()) {
        Some(Ok(dataset)) => dataset,
        Some(Err(err)) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        None => Dataset::default(),
    };
    let graph = match Graph::from_dataset(dataset, &NetworkParams::default()) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Failed to build the {} network: {:?}", dataset, err);
            std::process::exit(1);
        }
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Routefinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to compare route search algorithms")
        .with_banner("Welcome to Routefinder")
        .with_history(PathBuf::from(HISTORY_FILE), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("stats").about("Print average edge attributes"),
            stats,
        )
        .with_command(
            Command::new("airports").about("List all locations"),
            airports,
        )
        .with_command(
            route_command("compare", "Compare all algorithms on a route").arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Print the comparison as JSON"),
            ),
            compare,
        )
        .with_command(
            route_command("dijk", "Shortest distance using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            route_command(
                "cheapest",
                "Cheapest cost including layover penalty using Bellman-Ford",
            ),
            run_cheapest,
        )
        .with_command(
            route_command(
                "fastest",
                "Fastest time using the cached Floyd-Warshall matrix",
            ),
            run_fastest,
        );

    repl.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_a_plain_file_name() {
        let path = PathBuf::from(HISTORY_FILE);
        assert_eq!(path.components().count(), 1);
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("history"));
    }
}
