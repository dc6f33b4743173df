extern crate kruskal_mst;

use kruskal_mst::{read_graph, Graph, MstBuilder, MstConfig, ParseError};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

const THREADS_ENV: &str = "MST_THREADS";

fn load_graph(path: Option<&str>) -> Result<Graph<i64>, ParseError> {
    match path {
        Some(path) => read_graph(BufReader::new(File::open(path)?)),
        None => read_graph(io::stdin().lock()),
    }
}

fn config_from_env() -> MstConfig {
    let mut config = MstConfig::default();
    if let Ok(value) = std::env::var(THREADS_ENV) {
        match value.parse() {
            Ok(num_threads) => config.num_threads = num_threads,
            Err(_) => log::warn!("Ignoring {THREADS_ENV}={value:?}: not a thread count"),
        }
    }
    config
}

fn main() -> ExitCode {
    env_logger::init();

    let mut full = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--full" {
            full = true;
        } else {
            path = Some(arg);
        }
    }

    let graph = match load_graph(path.as_deref()) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Failed to read graph: {err}");
            return ExitCode::FAILURE;
        }
    };

    let builder = MstBuilder::new(config_from_env());
    let result = match builder.compute(graph.vertex_count, graph.edges) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Failed to compute spanning tree: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = io::stdout().lock();
    let written = if full {
        writeln!(
            out,
            "{}\nedges_used: {}\nspanning: {}",
            result.total_cost,
            result.edges_used,
            result.is_spanning_tree()
        )
    } else {
        writeln!(out, "{}", result.total_cost)
    };
    if let Err(err) = written {
        eprintln!("Failed to write result: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
