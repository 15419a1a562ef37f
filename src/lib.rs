//! Metro station graph loaded from SQLite, with breadth-first and depth-first
//! traversals and BFS visit trees.
//!
//! ```rust,no_run
//! use metrograph::{MetroGraph, SqliteStationStore};
//!
//! let store = SqliteStationStore::open("metro.db")?;
//! let graph = MetroGraph::load(&store)?;
//! let start = graph.stations().next().expect("at least one station");
//! for station in graph.breadth_first_visit(start)? {
//!     println!("{station}");
//! }
//! # Ok::<(), metrograph::MetroGraphError>(())
//! ```

pub mod config;
pub mod errors;
pub mod graph;
pub mod schema;
pub mod station;
pub mod store;
pub mod traversal;

pub use crate::config::{MetroConfig, OutputFormat, VisitKind};
pub use crate::errors::MetroGraphError;
pub use crate::graph::{MetroGraph, VisitTree};
pub use crate::station::{ConnectionPair, Station};
pub use crate::store::{MemoryStationStore, SqliteStationStore, StationStore};
pub use crate::traversal::{Adjacency, TraversalOrder};
