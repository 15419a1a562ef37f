//! Station stores: the data source a [`crate::MetroGraph`] is loaded from.
//!
//! [`SqliteStationStore`] reads the `stations` and `connections` tables;
//! [`MemoryStationStore`] serves the same contract from plain vectors.

use std::path::Path;

use ahash::AHashMap;
use rusqlite::{Connection, params};

use crate::{
    errors::MetroGraphError,
    schema::ensure_schema,
    station::{ConnectionPair, Station, row_to_station, validate_station},
};

pub trait StationStore {
    fn list_stations(&self) -> Result<Vec<Station>, MetroGraphError>;

    /// Every directed connection, with endpoints resolved through `lookup`.
    fn list_connections(
        &self,
        lookup: &AHashMap<i64, Station>,
    ) -> Result<Vec<ConnectionPair>, MetroGraphError>;
}

pub struct SqliteStationStore {
    conn: Connection,
}

impl SqliteStationStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MetroGraphError> {
        let conn =
            Connection::open(path).map_err(|e| MetroGraphError::connection(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Opens `path` and creates the tables if they are missing.
    pub fn open_with_schema<P: AsRef<Path>>(path: P) -> Result<Self, MetroGraphError> {
        let store = Self::open(path)?;
        ensure_schema(&store.conn)?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, MetroGraphError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| MetroGraphError::connection(e.to_string()))?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn insert_station(&self, station: &Station) -> Result<(), MetroGraphError> {
        validate_station(station)?;
        let (x, y) = station.coords();
        self.conn
            .execute(
                "INSERT INTO stations(id, name, coord_x, coord_y, line_direction) VALUES(?1, ?2, ?3, ?4, ?5)",
                params![station.id(), station.name(), x, y, station.line_direction()],
            )
            .map_err(|e| MetroGraphError::query(e.to_string()))?;
        Ok(())
    }

    /// Records that `line_id` runs from `from` to `to`. Endpoints are checked at load time.
    pub fn insert_connection(
        &self,
        line_id: i64,
        from: i64,
        to: i64,
    ) -> Result<i64, MetroGraphError> {
        self.conn
            .execute(
                "INSERT INTO connections(line_id, from_station, to_station) VALUES(?1, ?2, ?3)",
                params![line_id, from, to],
            )
            .map_err(|e| MetroGraphError::query(e.to_string()))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn connection_ids(&self) -> Result<Vec<(i64, i64)>, MetroGraphError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT DISTINCT from_station, to_station FROM connections ORDER BY from_station, to_station",
            )
            .map_err(|e| MetroGraphError::query(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(|e| MetroGraphError::query(e.to_string()))?;
        let mut pairs = Vec::new();
        for pair in rows {
            pairs.push(pair.map_err(|e| MetroGraphError::query(e.to_string()))?);
        }
        Ok(pairs)
    }
}

impl StationStore for SqliteStationStore {
    fn list_stations(&self) -> Result<Vec<Station>, MetroGraphError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, coord_x, coord_y, line_direction FROM stations ORDER BY id")
            .map_err(|e| MetroGraphError::query(e.to_string()))?;
        let rows = stmt
            .query_map([], row_to_station)
            .map_err(|e| MetroGraphError::query(e.to_string()))?;
        let mut stations = Vec::new();
        for station in rows {
            stations.push(station.map_err(|e| MetroGraphError::query(e.to_string()))?);
        }
        Ok(stations)
    }

    fn list_connections(
        &self,
        lookup: &AHashMap<i64, Station>,
    ) -> Result<Vec<ConnectionPair>, MetroGraphError> {
        resolve_pairs(self.connection_ids()?, lookup)
    }
}

/// Plain in-memory store, handy for fixtures and for embedding pre-fetched data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStationStore {
    stations: Vec<Station>,
    connections: Vec<(i64, i64)>,
}

impl MemoryStationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }

    pub fn with_connection(mut self, from: i64, to: i64) -> Self {
        self.connections.push((from, to));
        self
    }
}

impl StationStore for MemoryStationStore {
    fn list_stations(&self) -> Result<Vec<Station>, MetroGraphError> {
        Ok(self.stations.clone())
    }

    fn list_connections(
        &self,
        lookup: &AHashMap<i64, Station>,
    ) -> Result<Vec<ConnectionPair>, MetroGraphError> {
        resolve_pairs(self.connections.iter().copied(), lookup)
    }
}

fn resolve_pairs<I>(
    ids: I,
    lookup: &AHashMap<i64, Station>,
) -> Result<Vec<ConnectionPair>, MetroGraphError>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    ids.into_iter()
        .map(|(from, to)| -> Result<ConnectionPair, MetroGraphError> {
            let resolve = |id: i64| {
                lookup.get(&id).cloned().ok_or_else(|| {
                    MetroGraphError::inconsistent(format!(
                        "connection {from}->{to} references unknown station {id}"
                    ))
                })
            };
            Ok(ConnectionPair::new(resolve(from)?, resolve(to)?))
        })
        .collect()
}
