//! Driver configuration: where the stations live, where to start, and what to print.

use std::{path::PathBuf, str::FromStr};

use clap::Parser;

use crate::{
    errors::MetroGraphError,
    graph::MetroGraph,
    station::Station,
    store::SqliteStationStore,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitKind {
    BreadthFirst,
    DepthFirst,
    Tree,
    All,
}

impl FromStr for VisitKind {
    type Err = MetroGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(VisitKind::BreadthFirst),
            "dfs" => Ok(VisitKind::DepthFirst),
            "tree" => Ok(VisitKind::Tree),
            "all" => Ok(VisitKind::All),
            other => Err(MetroGraphError::invalid_input(format!(
                "unknown visit {other}, expected bfs|dfs|tree|all"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = MetroGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(MetroGraphError::invalid_input(format!(
                "unknown format {other}, expected text|json"
            ))),
        }
    }
}

#[derive(Parser, Clone, Debug)]
#[command(
    name = "metrograph",
    about = "Load a metro graph from SQLite and print its traversals"
)]
pub struct MetroConfig {
    /// SQLite database holding the stations and connections tables
    #[arg(long = "db", env = "METROGRAPH_DB")]
    pub database: PathBuf,

    /// Starting station, by id or by name (defaults to the first station)
    #[arg(long)]
    pub start: Option<String>,

    /// Traversal to print: bfs, dfs, tree or all
    #[arg(long = "order", default_value = "all")]
    pub visit: VisitKind,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

impl MetroConfig {
    pub fn open_store(&self) -> Result<SqliteStationStore, MetroGraphError> {
        if !self.database.exists() {
            return Err(MetroGraphError::connection(format!(
                "database {} does not exist",
                self.database.display()
            )));
        }
        SqliteStationStore::open(&self.database)
    }

    /// Picks the configured start station, or the first one in load order.
    pub fn resolve_start<'g>(
        &self,
        graph: &'g MetroGraph,
    ) -> Result<&'g Station, MetroGraphError> {
        match self.start.as_deref() {
            None => graph
                .stations()
                .next()
                .ok_or_else(|| MetroGraphError::not_found("graph has no stations")),
            Some(wanted) => {
                let found = match wanted.trim().parse::<i64>() {
                    Ok(id) => graph.station(id),
                    Err(_) => graph.station_by_name(wanted),
                };
                found.ok_or_else(|| MetroGraphError::not_found(format!("station {wanted}")))
            }
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
