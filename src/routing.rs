mod prefix;
mod route;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

pub use self::prefix::PathPrefix;
pub use self::route::{Leg, Route};
use crate::{Cost, Graph, Location, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteConfig<C> {
    /// Routes more expensive than this cost are not explored. None means unbounded.
    pub max_cost: Option<C>,
}

impl<C> Default for RouteConfig<C> {
    fn default() -> Self {
        Self { max_cost: None }
    }
}

#[derive(Debug)]
struct HeapElement<C> {
    prefix: Rc<PathPrefix<C>>,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl<C: Cost> Ord for HeapElement<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .prefix
            .cost()
            .cmp(&self.prefix.cost())
            // breaking ties in a deterministic way: prefer the cheaper, then earlier added, edges
            .then_with(|| other.prefix.cmp_branches(&self.prefix))
    }
}

impl<C: Cost> PartialOrd for HeapElement<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Cost> PartialEq for HeapElement<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Cost> Eq for HeapElement<C> {}

/// Returns the cheapest route from the source to the destination, or None if the destination
/// cannot be reached from the source.
///
/// See [`find_shortest_route_with`].
pub fn find_shortest_route<W: Weight>(
    graph: &Graph<W>,
    source: &Location,
    destination: &Location,
) -> Option<Route<W::Cost>> {
    find_shortest_route_with(&RouteConfig::default(), graph, source, destination)
}

/// Returns the cheapest route from the source to the destination that doesn't cost more than
/// the configured maximum, or None if there is no such route.
///
/// Locations that don't belong to the graph are treated as locations without edges, so the
/// only route they are part of is the one from the location to itself.
///
/// When more than one route has the minimum cost, the returned route is the one that at every
/// branching location prefers the cheapest edge and, among edges with the same cost, the edge
/// that was added to the graph first.
pub fn find_shortest_route_with<W: Weight>(
    config: &RouteConfig<W::Cost>,
    graph: &Graph<W>,
    source: &Location,
    destination: &Location,
) -> Option<Route<W::Cost>> {
    debug!("Computing shortest route {source} -> {destination} with {config:?}");

    // locations whose cheapest route from the source is already known
    let mut finalized: FxHashSet<Location> = FxHashSet::default();

    // priority queue of the discovered routes that may need to be followed
    let mut frontier = BinaryHeap::from([HeapElement {
        prefix: PathPrefix::origin(source.clone()),
    }]);

    while let Some(HeapElement { prefix }) = frontier.pop() {
        // a cheaper route to this location has already been followed
        if finalized.contains(prefix.location()) {
            trace!("Skipping {} at {:?}", prefix.location(), prefix.cost());
            continue;
        }

        if prefix.location() == destination {
            let route = prefix.to_route();
            debug!(
                "Found route {source} -> {destination} with {} legs at {:?}",
                route.len(),
                route.cost()
            );
            return Some(route);
        }

        trace!("Visiting {} at {:?}", prefix.location(), prefix.cost());
        finalized.insert(prefix.location().clone());

        for (rank, edge) in graph.neighbors(prefix.location()).into_iter().enumerate() {
            if finalized.contains(&edge.to) {
                continue;
            }

            let edge_cost = edge.cost();
            let cost = prefix.cost().saturating_add(edge_cost);
            if config.max_cost.is_some_and(|max_cost| cost > max_cost) {
                continue;
            }

            frontier.push(HeapElement {
                prefix: prefix.extend(edge.to.clone(), edge_cost, rank),
            });
        }
    }

    debug!("Cannot find route {source} -> {destination}");
    None
}
