mod graph;

use routefinder::{
    Column, Distance, Graph, LoadError, LoaderConfig, Road, Speed, load_distance_graph,
    load_road_graph,
};
use test_log::test;

use crate::graph::{DISTANCE_GRAPH, ROAD_GRAPH, location};

#[test]
fn loader_map_001() {
    let graph: &Graph<Distance> = &DISTANCE_GRAPH;

    assert_eq!(graph.location_count(), 9);
    assert_eq!(graph.edge_count(), 11);

    let neighbors: Vec<_> = graph
        .neighbors(&location("Gearford"))
        .into_iter()
        .map(|e| (e.to.name(), e.weight.value()))
        .collect();
    assert_eq!(
        neighbors,
        [
            ("Leverstorm", 20),
            ("Brasshaven", 30),
            ("Sprocketon", 35),
            ("Cogsworth", 50)
        ]
    );
}

#[test]
fn loader_map_002() {
    let graph: &Graph<Road> = &ROAD_GRAPH;

    assert_eq!(graph.location_count(), 9);
    assert_eq!(graph.edge_count(), 11);

    let neighbors: Vec<_> = graph
        .neighbors(&location("Gearford"))
        .into_iter()
        .map(|e| (e.to.name(), e.weight.duration().as_secs() / 60))
        .collect();
    assert_eq!(
        neighbors,
        [
            ("Brasshaven", 30),
            ("Sprocketon", 30),
            ("Leverstorm", 60),
            ("Cogsworth", 120)
        ]
    );
}

#[test]
fn loader_map_003() {
    let data = "\
from,to,distance,speed
  Steamdrift  ,  Irondale  ,  40  ,  80
";

    let graph = load_road_graph(&LoaderConfig::default(), data.as_bytes()).unwrap();

    let edges = graph.neighbors(&location("Irondale"));
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].to, location("Steamdrift"));
    assert_eq!(
        edges[0].weight,
        Road::new(Distance::new(40), Speed::new(80).unwrap())
    );
}

#[test]
fn loader_invalid_rows() {
    let config = LoaderConfig::default();

    let data = "from,to,distance\nA,B,ten\n";
    let error = load_distance_graph(&config, data.as_bytes()).unwrap_err();
    assert!(
        matches!(
            error,
            LoadError::InvalidNumber {
                line: 2,
                column: Column::Distance,
                ..
            }
        ),
        "{error:?}"
    );

    let data = "from,to,distance,speed\nA,B,1,0\n";
    let error = load_road_graph(&config, data.as_bytes()).unwrap_err();
    assert_eq!(error.to_string(), "Line 2: speed must be greater than zero");

    let error = load_distance_graph(&config, "from,to,distance\nA\n".as_bytes()).unwrap_err();
    assert_eq!(error.to_string(), "Line 2: missing column `to`");

    let data = "from,to,distance\n,B,1\n";
    let error = load_distance_graph(&config, data.as_bytes()).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Line 2: location in column `from` has no name"
    );
}
