use std::cmp::Ordering;
use std::rc::Rc;

use crate::routing::route::{Leg, Route};
use crate::{Cost, Location};

/// Partial route explored by the search: the last location reached, the cost accumulated
/// to reach it from the origin, and the prefix it was extended from.
///
/// Prefixes are never mutated once created. Extending a prefix creates a new node that points
/// back to it, so all the branches of the search share their common ancestors.
///
/// Every prefix also remembers which of the neighbors of the previous location it followed,
/// as the index of the edge in [`Graph::neighbors`](crate::Graph::neighbors).
#[derive(Debug)]
pub struct PathPrefix<C> {
    location: Location,
    cost: C,
    /// Index of the followed edge among the neighbors of the previous location, 0 for the origin.
    rank: usize,
    /// Number of edges followed from the origin.
    depth: usize,
    previous: Option<Rc<PathPrefix<C>>>,
}

impl<C: Cost> PathPrefix<C> {
    /// Creates the single location prefix every search starts from.
    pub fn origin(location: Location) -> Rc<Self> {
        Rc::new(Self {
            location,
            cost: C::ZERO,
            rank: 0,
            depth: 0,
            previous: None,
        })
    }

    /// Returns a new prefix that reaches the next location through an edge of the given cost.
    /// The rank is the index of the edge among the neighbors of the current location.
    pub fn extend(self: &Rc<Self>, location: Location, edge_cost: C, rank: usize) -> Rc<Self> {
        Rc::new(Self {
            location,
            cost: self.cost.saturating_add(edge_cost),
            rank,
            depth: self.depth + 1,
            previous: Some(Rc::clone(self)),
        })
    }

    /// Compares the edge ranks followed by two prefixes of the same search, from the origin
    /// onwards. The first branch point where they diverge decides; if one prefix continues the
    /// other, the shorter one comes first.
    pub fn cmp_branches(&self, other: &Self) -> Ordering {
        let depth = self.depth.min(other.depth);
        let mut ordering = self.depth.cmp(&other.depth);

        let mut a = self.ancestor(depth);
        let mut b = other.ancestor(depth);

        // walk back to the common ancestor, the last difference seen is the closest to the origin
        while !std::ptr::eq(a, b) {
            match a.rank.cmp(&b.rank) {
                Ordering::Equal => {}
                rank => ordering = rank,
            }

            match (a.previous.as_deref(), b.previous.as_deref()) {
                (Some(previous_a), Some(previous_b)) => {
                    a = previous_a;
                    b = previous_b;
                }
                _ => break,
            }
        }

        ordering
    }

    fn ancestor(&self, depth: usize) -> &Self {
        let mut prefix = self;
        while prefix.depth > depth {
            match prefix.previous.as_deref() {
                Some(previous) => prefix = previous,
                None => break,
            }
        }
        prefix
    }

    pub const fn location(&self) -> &Location {
        &self.location
    }

    pub fn cost(&self) -> C {
        self.cost
    }

    /// Unpacks the prefix from its last location back to the origin.
    pub fn to_route(&self) -> Route<C> {
        let mut legs = vec![];
        let mut next = Some(self);

        while let Some(prefix) = next {
            legs.push(Leg {
                location: prefix.location.clone(),
                cost: prefix.cost,
            });
            next = prefix.previous.as_deref();
        }

        legs.reverse();
        Route::new(legs)
    }
}

// Long chains would otherwise be dropped recursively, one stack frame per ancestor.
impl<C> Drop for PathPrefix<C> {
    fn drop(&mut self) {
        let mut previous = self.previous.take();

        while let Some(prefix) = previous {
            match Rc::try_unwrap(prefix) {
                Ok(mut prefix) => previous = prefix.previous.take(),
                // still shared by another branch
                Err(_) => break,
            }
        }
    }
}
