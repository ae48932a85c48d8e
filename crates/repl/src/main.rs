//! Interactive shell over the city route search.
use std::path::Path;

use anyhow::Context as _;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::prelude::*;

/// Distances in kilometers between East Java cities.
const EAST_JAVA: &[(&str, &str, f64)] = &[
    ("surabaya", "pasuruan", 62.0),
    ("surabaya", "sidoarjo", 26.0),
    ("surabaya", "mojokerto", 52.0),
    ("surabaya", "malang", 94.6),
    ("surabaya", "probolinggo", 101.0),
    ("pasuruan", "sidoarjo", 61.0),
    ("pasuruan", "kediri", 110.0),
    ("pasuruan", "malang", 45.0),
    ("pasuruan", "probolinggo", 50.0),
    ("sidoarjo", "mojokerto", 51.3),
    ("sidoarjo", "malang", 67.7),
    ("kediri", "mojokerto", 80.0),
    ("mojokerto", "tulungagung", 110.0),
    ("tulungagung", "blitar", 29.2),
    ("blitar", "madiun", 134.0),
    ("madiun", "malang", 234.0),
    ("malang", "probolinggo", 80.0),
];

struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn format_route(graph: &Graph, route: &Route) -> String {
    route
        .nodes
        .iter()
        .map(|&node| graph.node(node).unwrap().name.as_str())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// List known cities
fn cities(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut names: Vec<&str> = context.graph.nodes().map(|city| city.name.as_str()).collect();
    names.sort_unstable();
    Ok(Some(names.join("\n")))
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} cities and {} edges",
        context.graph.nodes.len(),
        context.graph.edges.len()
    )))
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = args.get_one::<String>("from").unwrap();
    let to = args.get_one::<String>("to").unwrap();

    let (src, dst) = match (context.graph.index_of(from), context.graph.index_of(to)) {
        (Ok(src), Ok(dst)) => (src, dst),
        (Err(err), _) | (_, Err(err)) => return Ok(Some(err.to_string())),
    };

    let mut dijkstra = Dijkstra::new(&context.graph);
    match dijkstra.search(src, dst) {
        Some(route) => Ok(Some(format!(
            "{}\nTotal distance: {:.2} km\n{}",
            format_route(&context.graph, &route),
            route.weight,
            dijkstra.stats
        ))),
        None => Ok(Some(format!("No route between {from} and {to}"))),
    }
}

fn run_tour(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut brute_force = BruteForce::new(&context.graph);
    match brute_force.search() {
        Some(route) => Ok(Some(format!(
            "{}\nTotal distance: {:.2} km\n{}",
            format_route(&context.graph, &route),
            route.weight,
            brute_force.stats
        ))),
        None => Ok(Some("No feasible tour visiting every city".to_string())),
    }
}

fn measure_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    let num_cities = context.graph.nodes.len();
    if num_cities == 0 {
        return Ok(Some("Graph is empty".to_string()));
    }

    let mut rng = rand::thread_rng();
    let mut res = String::new();
    for _ in 0..n {
        let src = node_index(rng.gen_range(0..num_cities));
        let dst = node_index(rng.gen_range(0..num_cities));

        let mut dijkstra = Dijkstra::new(&context.graph);
        if dijkstra.search(src, dst).is_none() {
            continue;
        }
        res.push_str(&format!(
            "{} -> {}: {:?}\n",
            context.graph.node(src).unwrap(),
            context.graph.node(dst).unwrap(),
            dijkstra.stats.duration
        ));
    }

    Ok(Some(res))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Init Graph: edge list CSV from the command line, or the built-in table
    let graph = match std::env::args().nth(1) {
        Some(path) => Graph::from_csv(Path::new(&path))
            .with_context(|| format!("Failed to load edge list from {path}"))?,
        None => Graph::from_edge_list(EAST_JAVA).context("Failed to build city table")?,
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Route search over the city map")
        .with_banner("Welcome to Pathfinder")
        .with_command(Command::new("cities").about("List known cities"), cities)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("route")
                .arg(Arg::new("from").required(true).help("Origin city"))
                .arg(Arg::new("to").required(true).help("Destination city"))
                .about("Calculate shortest route using Dijkstra's algorithm"),
            run_route,
        )
        .with_command(
            Command::new("tour").about(
                "Calculate shortest route visiting every city once (brute force, no return)",
            ),
            run_tour,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest route calculations"),
                )
                .about("Measure `n` random shortest route calculations"),
            measure_route,
        );

    if let Err(err) = repl.run() {
        anyhow::bail!("repl terminated: {err}");
    }
    Ok(())
}
