use rustc_hash::FxHashMap;

use crate::{Location, Weight};

/// Connection from a location to one of its neighbors.
/// Every undirected road of the graph is stored as two edges, one per direction, that share
/// the same weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    /// The neighbor reached by following the edge.
    pub to: Location,
    pub weight: W,
}

impl<W: Weight> Edge<W> {
    pub fn cost(&self) -> W::Cost {
        self.weight.cost()
    }
}

/// Undirected weighted graph of named locations.
///
/// The graph is built by adding edges one by one and is never shrunk: there is no way to
/// remove a location or an edge. Locations only exist in the graph once an edge touching them
/// has been added.
#[derive(Debug, Clone)]
pub struct Graph<W> {
    adjacency: FxHashMap<Location, Vec<Edge<W>>>,
    edge_count: usize,
}

impl<W> Default for Graph<W> {
    fn default() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            edge_count: 0,
        }
    }
}

impl<W: Weight> Graph<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the undirected edge between the two locations.
    /// Adding the same pair of locations more than once creates parallel edges.
    pub fn add(&mut self, from: Location, to: Location, weight: W) {
        self.adjacency.entry(to.clone()).or_default().push(Edge {
            to: from.clone(),
            weight,
        });

        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to, weight });

        self.edge_count += 1;
    }

    /// Gets the edges leaving the location sorted from the cheapest to the most expensive.
    /// Edges with the same cost keep the order in which they were added to the graph.
    /// Returns an empty list if the location doesn't belong to the graph.
    pub fn neighbors(&self, location: &Location) -> Vec<&Edge<W>> {
        let mut edges: Vec<_> = self
            .adjacency
            .get(location)
            .into_iter()
            .flatten()
            .collect();

        // stable: ties are kept in insertion order
        edges.sort_by_key(|edge| edge.cost());
        edges
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Gets an iterator over all the locations that have at least one edge, in no particular
    /// order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.adjacency.keys()
    }

    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges added to the graph.
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }
}
