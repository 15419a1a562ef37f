use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::errors::MetroGraphError;

/// A metro stop. Identity is the numeric id; the remaining fields are payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    id: i64,
    name: String,
    coord_x: f64,
    coord_y: f64,
    line_direction: bool,
}

impl Station {
    pub fn new<N: Into<String>>(
        id: i64,
        name: N,
        coord_x: f64,
        coord_y: f64,
        line_direction: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            coord_x,
            coord_y,
            line_direction,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.coord_x, self.coord_y)
    }

    pub fn line_direction(&self) -> bool {
        self.line_direction
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A directed connection with both endpoints already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPair {
    pub from: Station,
    pub to: Station,
}

impl ConnectionPair {
    pub fn new(from: Station, to: Station) -> Self {
        Self { from, to }
    }
}

pub fn validate_station(station: &Station) -> Result<(), MetroGraphError> {
    if station.name.trim().is_empty() {
        return Err(MetroGraphError::invalid_input(format!(
            "station {} has an empty name",
            station.id
        )));
    }
    if !station.coord_x.is_finite() || !station.coord_y.is_finite() {
        return Err(MetroGraphError::invalid_input(format!(
            "station {} has non-finite coordinates",
            station.id
        )));
    }
    Ok(())
}

pub fn row_to_station(row: &rusqlite::Row<'_>) -> Result<Station, rusqlite::Error> {
    Ok(Station {
        id: row.get(0)?,
        name: row.get(1)?,
        coord_x: row.get(2)?,
        coord_y: row.get(3)?,
        line_direction: row.get(4)?,
    })
}
