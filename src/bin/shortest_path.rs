use dijkstra_path::graph::{fixtures::reference_map, loader, Graph};
use dijkstra_path::{Dijkstra, ShortestPathAlgorithm, SourceDistance};
use std::env;
use std::fmt::Display;
use std::fs::File;
use std::process;

const USAGE: &str = "usage: shortest_path [SOURCE] [TARGET] [--graph FILE.json] \
                     [--zero-source] [--stop-at-target]";

#[derive(Debug)]
struct Options {
    source: usize,
    target: usize,
    graph_file: Option<String>,
    zero_source: bool,
    stop_at_target: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: 0,
            target: 4,
            graph_file: None,
            zero_source: false,
            stop_at_target: false,
        }
    }
}

/// Parses the command line; `Ok(None)` means help was requested
fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    let mut positional = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--graph" => {
                let path = iter.next().ok_or("--graph needs a file path")?;
                options.graph_file = Some(path.clone());
            }
            "--zero-source" => options.zero_source = true,
            "--stop-at-target" => options.stop_at_target = true,
            "-h" | "--help" => return Ok(None),
            other => positional.push(
                other
                    .parse::<usize>()
                    .map_err(|_| format!("not a node id: {}\n{}", other, USAGE))?,
            ),
        }
    }

    match positional.as_slice() {
        [] => {}
        [source] => options.source = *source,
        [source, target] => {
            options.source = *source;
            options.target = *target;
        }
        _ => return Err(format!("too many node ids\n{}", USAGE)),
    }

    Ok(Some(options))
}

fn run<G>(graph: &G, options: &Options) -> Result<(), Box<dyn std::error::Error>>
where
    G: Graph<Node = usize>,
    G::Weight: Display,
{
    let policy = if options.zero_source {
        SourceDistance::Zero
    } else {
        SourceDistance::Absent
    };
    let dijkstra = Dijkstra::new()
        .with_source_distance(policy)
        .with_stop_at_target(options.stop_at_target);

    log::info!(
        "Searching {} -> {} on a graph with {} nodes and {} edges",
        options.source,
        options.target,
        graph.node_count(),
        graph.edge_count()
    );
    let route = dijkstra.search(graph, options.source, options.target)?;

    match &route.distance {
        Some(distance) => println!("Distance: {}", distance),
        None => println!("Distance: undefined"),
    }
    match &route.path {
        Ok(path) => {
            let rendered: Vec<String> = path.iter().map(|n| n.to_string()).collect();
            println!("Path: {}", rendered.join(" -> "));
        }
        Err(e) => println!("Path: {}", e),
    }
    log::debug!("Route: {}", route);

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    match &options.graph_file {
        Some(path) => {
            let file = File::open(path)?;
            let graph = loader::from_json_reader::<usize, _>(file)?;
            run(&graph, &options)
        }
        None => run(&reference_map(), &options),
    }
}
