//! Loading of road maps from CSV edge lists.
//!
//! Every row of the source is an undirected road: `from, to, distance` for distance maps and
//! `from, to, distance, speed` for travel time maps. Fields are trimmed and columns beyond the
//! expected ones are ignored, so a travel time map can also be loaded as a distance map.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use strum::Display;
use tracing::debug;

use crate::{Distance, Graph, LoadError, Location, Road, Speed, Weight};

#[derive(Debug, Clone, Copy)]
pub struct LoaderConfig {
    /// Whether the first row is a header to be skipped.
    pub has_headers: bool,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            has_headers: true,
            delimiter: b',',
        }
    }
}

/// Columns of a road map row, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Column {
    From = 0,
    To = 1,
    Distance = 2,
    Speed = 3,
}

impl Column {
    const fn index(self) -> usize {
        self as usize
    }
}

/// Loads a map whose roads are weighted by their distance.
pub fn load_distance_graph(
    config: &LoaderConfig,
    reader: impl Read,
) -> Result<Graph<Distance>, LoadError> {
    load_graph(config, reader, |row| row.distance())
}

/// Loads a map whose roads are weighted by the time needed to travel them.
pub fn load_road_graph(config: &LoaderConfig, reader: impl Read) -> Result<Graph<Road>, LoadError> {
    load_graph(config, reader, |row| {
        let distance = row.distance()?;
        let speed = row
            .number(Column::Speed)
            .map(Speed::new)?
            .ok_or(LoadError::ZeroSpeed { line: row.line })?;

        Ok(Road::new(distance, speed))
    })
}

pub fn load_distance_graph_from_path(
    config: &LoaderConfig,
    path: impl AsRef<Path>,
) -> Result<Graph<Distance>, LoadError> {
    let file = File::open(path)?;
    load_distance_graph(config, file)
}

pub fn load_road_graph_from_path(
    config: &LoaderConfig,
    path: impl AsRef<Path>,
) -> Result<Graph<Road>, LoadError> {
    let file = File::open(path)?;
    load_road_graph(config, file)
}

fn load_graph<W: Weight>(
    config: &LoaderConfig,
    reader: impl Read,
    parse_weight: impl Fn(&Row) -> Result<W, LoadError>,
) -> Result<Graph<W>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(config.has_headers)
        .delimiter(config.delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut graph = Graph::new();

    for record in csv_reader.records() {
        let record = record?;
        let row = Row {
            line: record.position().map_or(0, |p| p.line()),
            record: &record,
        };

        let from = row.location(Column::From)?;
        let to = row.location(Column::To)?;
        let weight = parse_weight(&row)?;

        graph.add(from, to, weight);
    }

    debug!(
        "Loaded road map with {} locations and {} roads",
        graph.location_count(),
        graph.edge_count()
    );

    Ok(graph)
}

struct Row<'a> {
    line: u64,
    record: &'a StringRecord,
}

impl Row<'_> {
    fn field(&self, column: Column) -> Result<&str, LoadError> {
        self.record
            .get(column.index())
            .ok_or(LoadError::MissingColumn {
                line: self.line,
                column,
            })
    }

    fn location(&self, column: Column) -> Result<Location, LoadError> {
        match self.field(column)? {
            "" => Err(LoadError::EmptyLocation {
                line: self.line,
                column,
            }),
            name => Ok(Location::new(name)),
        }
    }

    fn number<T: FromStr>(&self, column: Column) -> Result<T, LoadError> {
        let value = self.field(column)?;
        value.parse().map_err(|_| LoadError::InvalidNumber {
            line: self.line,
            column,
            value: value.to_owned(),
        })
    }

    fn distance(&self) -> Result<Distance, LoadError> {
        self.number(Column::Distance).map(Distance::new)
    }
}
