use std::fmt::{self, Debug};
use std::iter::Sum;
use std::num::NonZeroU32;
use std::ops::Add;
use std::sync::Arc;
use std::time::Duration;

const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_HOUR: u128 = 3_600 * NANOS_PER_SECOND;

/// Named vertex of the map.
/// Locations have no identity beyond their name: two locations with the same name are the
/// same vertex.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location(Arc<str>);

impl Location {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// The cost of traversing a path, accumulated edge by edge by the route search.
///
/// Costs must be non-negative and additive: extending a path can never make it cheaper.
/// Under these conditions the first time a location is reached at minimal cost is final.
pub trait Cost: Debug + Copy + Ord {
    /// Cost of a path without edges.
    const ZERO: Self;

    /// Sum of two costs, clamped at the maximum representable cost.
    ///
    /// Routes whose cost saturates all cost the maximum and compare equal, so the search can no
    /// longer tell which of them is cheaper and picks one by its tie-break on edge order.
    fn saturating_add(self, other: Self) -> Self;
}

/// The weight attached to an undirected edge of the graph.
/// Defines the cost model the route search minimizes.
pub trait Weight: Debug + Copy {
    type Cost: Cost;

    /// Gets the cost of traversing the edge.
    fn cost(&self) -> Self::Cost;
}

/// Physical length of a road, as an integer number of distance units.
/// Used both as an edge weight and as the cost of the distance model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Cost for Distance {
    const ZERO: Self = Self::ZERO;

    fn saturating_add(self, other: Self) -> Self {
        self + other
    }
}

impl Weight for Distance {
    type Cost = Self;

    fn cost(&self) -> Self {
        *self
    }
}

/// Elapsed travel time, the cost of the duration model.
impl Cost for Duration {
    const ZERO: Self = Duration::ZERO;

    fn saturating_add(self, other: Self) -> Self {
        Duration::saturating_add(self, other)
    }
}

/// Travel speed along a road, in distance units per hour. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(NonZeroU32);

impl Speed {
    /// Returns None if the speed is zero.
    pub const fn new(units_per_hour: u32) -> Option<Self> {
        match NonZeroU32::new(units_per_hour) {
            Some(speed) => Some(Self(speed)),
            None => None,
        }
    }

    pub const fn units_per_hour(&self) -> u32 {
        self.0.get()
    }
}

/// A road that can be travelled at a constant speed.
/// Edge weight of the duration model: its cost is the time needed to drive along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Road {
    pub distance: Distance,
    pub speed: Speed,
}

impl Road {
    pub const fn new(distance: Distance, speed: Speed) -> Self {
        Self { distance, speed }
    }

    /// Gets the time needed to travel the whole road (distance / speed hours).
    /// Computed with integer arithmetic and truncated to the nanosecond, so that roads with
    /// the same distance and speed always take exactly the same time.
    pub fn duration(&self) -> Duration {
        let nanos = u128::from(self.distance.value()) * NANOS_PER_HOUR
            / u128::from(self.speed.units_per_hour());

        match u64::try_from(nanos / NANOS_PER_SECOND) {
            // the remainder is always lower than one second
            Ok(seconds) => Duration::new(seconds, (nanos % NANOS_PER_SECOND) as u32),
            Err(_) => Duration::MAX,
        }
    }
}

impl Weight for Road {
    type Cost = Duration;

    fn cost(&self) -> Duration {
        self.duration()
    }
}
