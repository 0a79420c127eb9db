#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod loader;
mod model;
mod routing;

pub use error::LoadError;
pub use graph::{Edge, Graph};
pub use loader::{
    Column, LoaderConfig, load_distance_graph, load_distance_graph_from_path, load_road_graph,
    load_road_graph_from_path,
};
pub use model::{Cost, Distance, Location, Road, Speed, Weight};
pub use routing::{
    Leg, PathPrefix, Route, RouteConfig, find_shortest_route, find_shortest_route_with,
};
