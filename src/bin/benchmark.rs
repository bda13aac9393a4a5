use std::time::{Duration, Instant};

use sparse_paths::graph::generators::random_directed;
use sparse_paths::graph::{Graph, SparseGraph};
use sparse_paths::{BellmanFord, Dijkstra, ShortestPathAlgorithm};

// Times one algorithm on a graph and reports how many nodes it reached
fn benchmark_algorithm<A>(algorithm: &A, graph: &SparseGraph<f64>, origin: usize) -> Duration
where
    A: ShortestPathAlgorithm<f64, SparseGraph<f64>>,
{
    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, origin) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  {} failed: {}", algorithm.name(), err);
            return start.elapsed();
        }
    };
    let elapsed = start.elapsed();

    let reachable = result.distances().iter().filter(|d| d.is_finite()).count();
    println!(
        "  {:<13} reached {:>6} nodes in {:?}",
        algorithm.name(),
        reachable,
        elapsed
    );

    elapsed
}

fn main() {
    env_logger::init();

    let sizes = [100, 500, 1_000, 5_000];
    let edge_factor = 4;
    let origin = 0;

    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();

    for &n in &sizes {
        let graph = match random_directed(n, n * edge_factor, 100) {
            Ok(graph) => graph,
            Err(err) => {
                eprintln!("failed to generate graph with {} nodes: {}", n, err);
                continue;
            }
        };

        println!(
            "graph with {} nodes and {} edges:",
            graph.node_count(),
            graph.edge_count()
        );

        let dijkstra_time = benchmark_algorithm(&dijkstra, &graph, origin);
        let bellman_time = benchmark_algorithm(&bellman_ford, &graph, origin);

        if !dijkstra_time.is_zero() {
            println!(
                "  Bellman-Ford / Dijkstra time ratio: {:.2}",
                bellman_time.as_secs_f64() / dijkstra_time.as_secs_f64()
            );
        }
        println!();
    }
}
