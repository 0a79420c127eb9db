use std::fmt;
use std::ops::Deref;
use std::time::Duration;

use crate::{Cost, Distance, Location};

/// A stop along a route with the cost accumulated since the departure.
/// For travel time routes the cost is the time elapsed since the departure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Leg<C> {
    pub location: Location,
    pub cost: C,
}

/// Cheapest route found between two locations.
/// The legs are ordered from the departure to the arrival, and there is always at least one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route<C>(Vec<Leg<C>>);

impl<C> Route<C> {
    /// Routes are only built by the search, from a non-empty chain of legs.
    pub(crate) fn new(legs: Vec<Leg<C>>) -> Self {
        debug_assert!(!legs.is_empty());
        Self(legs)
    }
}

impl<C> Deref for Route<C> {
    type Target = [Leg<C>];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<C: Cost> Route<C> {
    /// Gets the total cost of the route, that is the cost accumulated at the arrival.
    pub fn cost(&self) -> C {
        self.last().map_or(C::ZERO, |leg| leg.cost)
    }

    pub fn departure(&self) -> Option<&Location> {
        self.first().map(|leg| &leg.location)
    }

    pub fn arrival(&self) -> Option<&Location> {
        self.last().map(|leg| &leg.location)
    }

    pub fn locations(&self) -> impl DoubleEndedIterator<Item = &Location> {
        self.iter().map(|leg| &leg.location)
    }
}

/// Formats the locations of the route separated by arrows: `A -> B -> C`.
impl fmt::Display for Route<Distance> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, location) in self.locations().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{location}")?;
        }
        Ok(())
    }
}

/// Formats one line per leg with the time elapsed since the departure, e.g.
///
/// ```text
/// 00:00 DEPART Steamdrift
/// 01:30 ARRIVE Leverstorm
/// ```
///
/// Hours are not wrapped around at 24.
impl fmt::Display for Route<Duration> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, leg) in self.iter().enumerate() {
            let minutes = leg.cost.as_secs() / 60;
            let action = if i == 0 { "DEPART" } else { "ARRIVE" };
            writeln!(
                f,
                "{:02}:{:02} {action} {}",
                minutes / 60,
                minutes % 60,
                leg.location
            )?;
        }
        Ok(())
    }
}
