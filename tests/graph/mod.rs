#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::LazyLock;

use routefinder::{
    Cost, Distance, Graph, LoaderConfig, Location, Road, Weight, load_distance_graph_from_path,
    load_road_graph_from_path,
};

pub const MAP_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/map.csv");

/// Road map of the valley, by distance.
pub static DISTANCE_GRAPH: LazyLock<Graph<Distance>> = LazyLock::new(|| {
    load_distance_graph_from_path(&LoaderConfig::default(), MAP_PATH).unwrap()
});

/// Road map of the valley, by travel time.
pub static ROAD_GRAPH: LazyLock<Graph<Road>> =
    LazyLock::new(|| load_road_graph_from_path(&LoaderConfig::default(), MAP_PATH).unwrap());

pub fn location(name: &str) -> Location {
    Location::new(name)
}

/// Minimum cost over all the simple paths between the two locations, found by enumerating
/// them all. Only meant for small graphs.
pub fn brute_force_cost<W: Weight>(
    graph: &Graph<W>,
    source: &Location,
    destination: &Location,
) -> Option<W::Cost> {
    fn visit<W: Weight>(
        graph: &Graph<W>,
        current: &Location,
        destination: &Location,
        cost: W::Cost,
        visited: &mut HashSet<Location>,
        best: &mut Option<W::Cost>,
    ) {
        if current == destination {
            *best = Some(best.map_or(cost, |best| best.min(cost)));
            return;
        }

        for edge in graph.neighbors(current) {
            if visited.insert(edge.to.clone()) {
                let cost = cost.saturating_add(edge.cost());
                visit(graph, &edge.to, destination, cost, visited, best);
                visited.remove(&edge.to);
            }
        }
    }

    let mut visited = HashSet::from([source.clone()]);
    let mut best = None;
    visit(graph, source, destination, <W::Cost as Cost>::ZERO, &mut visited, &mut best);
    best
}

/// Small linear congruential generator, enough to build reproducible random graphs.
pub struct Lcg(u64);

impl Lcg {
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_below(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) % bound
    }
}

/// Builds a random graph of `vertices` locations named `0..vertices` with `edges` roads.
pub fn random_graph<W: Weight>(
    rng: &mut Lcg,
    vertices: u64,
    edges: usize,
    mut weight: impl FnMut(&mut Lcg) -> W,
) -> Graph<W> {
    let mut graph = Graph::new();
    for _ in 0..edges {
        let from = rng.next_below(vertices);
        let to = rng.next_below(vertices);
        let weight = weight(rng);
        graph.add(location(&from.to_string()), location(&to.to_string()), weight);
    }
    graph
}
