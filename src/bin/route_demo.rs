use sparse_paths::{BellmanFord, Dijkstra, ShortestPathAlgorithm, SparseGraph};

// A small undirected road network: six towns, weighted by travel time
const TOWNS: [&str; 6] = ["Alder", "Birch", "Cedar", "Dover", "Elm", "Ferry"];

fn main() -> sparse_paths::Result<()> {
    env_logger::init();

    let mut network: SparseGraph<f64> = SparseGraph::undirected(TOWNS.len());
    network.add_edges(&[
        (0, 1, 6.0),
        (0, 2, 3.0),
        (1, 2, 2.0),
        (1, 3, 5.0),
        (2, 3, 3.0),
        (2, 4, 4.0),
        (3, 4, 5.0),
        (3, 5, 3.0),
        (4, 5, 5.0),
    ])?;

    println!("road network adjacency:");
    println!("{}", network);

    let origin = 0;
    for algorithm in [
        &Dijkstra::new() as &dyn ShortestPathAlgorithm<f64, SparseGraph<f64>>,
        &BellmanFord::new(),
    ] {
        let result = algorithm.compute_shortest_paths(&network, origin)?;
        println!("{} from {}:", algorithm.name(), TOWNS[origin]);
        for town in 0..TOWNS.len() {
            match result.path_to(town) {
                Ok(path) => {
                    let route: Vec<&str> = path.into_iter().map(|id| TOWNS[id]).collect();
                    println!(
                        "  {:<6} {:>4} via {}",
                        TOWNS[town],
                        result.distance_to(town)?,
                        route.join(" -> ")
                    );
                }
                Err(err) => println!("  {:<6} {}", TOWNS[town], err),
            }
        }
        println!();
    }

    Ok(())
}
