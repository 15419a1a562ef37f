//! The in-memory metro graph and its traversal operations.

use std::fmt;

use ahash::AHashMap;

use crate::{
    errors::MetroGraphError,
    station::{ConnectionPair, Station},
    store::StationStore,
    traversal::{self, Adjacency, TraversalOrder},
};

/// Directed, simple graph over [`Station`] vertices, read-only after construction.
///
/// Vertices keep the order the store listed them in; out-neighbours keep
/// the order their connections were listed in.
pub struct MetroGraph {
    stations: Vec<Station>,
    index: AHashMap<i64, usize>,
    outgoing: Vec<Vec<usize>>,
    edge_count: usize,
}

impl MetroGraph {
    /// Loads every station and connection from `store`.
    ///
    /// Any store or consistency failure aborts the load; no partial graph is returned.
    pub fn load<S: StationStore + ?Sized>(store: &S) -> Result<Self, MetroGraphError> {
        let stations = store.list_stations()?;
        let lookup = station_lookup(&stations);
        let pairs = store.list_connections(&lookup)?;
        let graph = Self::from_parts(stations, pairs)?;
        log::info!(
            "metro graph loaded with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    pub fn from_parts(
        stations: Vec<Station>,
        pairs: Vec<ConnectionPair>,
    ) -> Result<Self, MetroGraphError> {
        let mut index = AHashMap::with_capacity(stations.len());
        for (pos, station) in stations.iter().enumerate() {
            if index.insert(station.id(), pos).is_some() {
                return Err(MetroGraphError::inconsistent(format!(
                    "duplicate station id {}",
                    station.id()
                )));
            }
        }
        let mut graph = Self {
            outgoing: vec![Vec::new(); stations.len()],
            stations,
            index,
            edge_count: 0,
        };
        for pair in &pairs {
            graph.add_edge(pair)?;
        }
        Ok(graph)
    }

    fn add_edge(&mut self, pair: &ConnectionPair) -> Result<(), MetroGraphError> {
        let from = self.position_of(&pair.from).ok_or_else(|| {
            MetroGraphError::inconsistent(format!(
                "edge origin {} is not a station",
                pair.from.id()
            ))
        })?;
        let to = self.position_of(&pair.to).ok_or_else(|| {
            MetroGraphError::inconsistent(format!(
                "edge target {} is not a station",
                pair.to.id()
            ))
        })?;
        if from == to {
            return Err(MetroGraphError::inconsistent(format!(
                "self loop on station {}",
                pair.from.id()
            )));
        }
        let targets = &mut self.outgoing[from];
        if targets.contains(&to) {
            log::debug!(
                "ignoring duplicate connection {} -> {}",
                pair.from.id(),
                pair.to.id()
            );
            return Ok(());
        }
        targets.push(to);
        self.edge_count += 1;
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.stations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn station(&self, id: i64) -> Option<&Station> {
        self.index.get(&id).map(|&pos| &self.stations[pos])
    }

    /// First station (in load order) whose name matches, ignoring ASCII case.
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        let wanted = name.trim();
        self.stations
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(wanted))
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.index.contains_key(&station.id())
    }

    pub fn has_edge(&self, from: &Station, to: &Station) -> bool {
        match (self.position_of(from), self.position_of(to)) {
            (Some(a), Some(b)) => self.outgoing[a].contains(&b),
            _ => false,
        }
    }

    pub fn successors(&self, station: &Station) -> Result<Vec<&Station>, MetroGraphError> {
        let pos = self.require(station)?;
        Ok(self.resolve(self.outgoing[pos].iter().copied()))
    }

    /// Stations reachable from `source`, in breadth-first discovery order.
    pub fn breadth_first_visit(
        &self,
        source: &Station,
    ) -> Result<Vec<&Station>, MetroGraphError> {
        self.visit(source, TraversalOrder::BreadthFirst)
    }

    /// Stations reachable from `source`, in depth-first discovery order.
    pub fn depth_first_visit(
        &self,
        source: &Station,
    ) -> Result<Vec<&Station>, MetroGraphError> {
        self.visit(source, TraversalOrder::DepthFirst)
    }

    pub fn visit(
        &self,
        source: &Station,
        order: TraversalOrder,
    ) -> Result<Vec<&Station>, MetroGraphError> {
        let start = self.require(source)?;
        Ok(self.resolve(traversal::walk(self, start, order)))
    }

    /// Breadth-first spanning tree of everything reachable from `source`.
    pub fn visit_tree(&self, source: &Station) -> Result<VisitTree<'_>, MetroGraphError> {
        let start = self.require(source)?;
        let discovered = traversal::discovery_parents(self, start);
        let mut order = Vec::with_capacity(discovered.len());
        let mut parents = AHashMap::with_capacity(discovered.len());
        for (node, parent) in discovered {
            let station = &self.stations[node];
            order.push(station);
            parents.insert(station, parent.map(|p| &self.stations[p]));
        }
        Ok(VisitTree {
            root: &self.stations[start],
            order,
            parents,
        })
    }

    fn position_of(&self, station: &Station) -> Option<usize> {
        self.index.get(&station.id()).copied()
    }

    fn require(&self, station: &Station) -> Result<usize, MetroGraphError> {
        self.position_of(station)
            .ok_or(MetroGraphError::UnknownVertex(station.id()))
    }

    fn resolve<I: IntoIterator<Item = usize>>(&self, positions: I) -> Vec<&Station> {
        positions.into_iter().map(|pos| &self.stations[pos]).collect()
    }
}

impl Adjacency for MetroGraph {
    fn vertex_count(&self) -> usize {
        self.stations.len()
    }

    fn out_neighbors(&self, vertex: usize) -> &[usize] {
        &self.outgoing[vertex]
    }
}

impl fmt::Debug for MetroGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetroGraph")
            .field("vertices", &self.stations.len())
            .field("edges", &self.edge_count)
            .finish()
    }
}

/// Duplicate ids are rejected later by [`MetroGraph::from_parts`].
fn station_lookup(stations: &[Station]) -> AHashMap<i64, Station> {
    stations.iter().map(|s| (s.id(), s.clone())).collect()
}

/// Parent pointers recorded by a breadth-first visit.
///
/// Every reached station maps to the station that discovered it; the root maps to `None`.
#[derive(Debug, Clone)]
pub struct VisitTree<'g> {
    root: &'g Station,
    order: Vec<&'g Station>,
    parents: AHashMap<&'g Station, Option<&'g Station>>,
}

impl<'g> VisitTree<'g> {
    pub fn root(&self) -> &'g Station {
        self.root
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.parents.contains_key(station)
    }

    /// `None` when `station` was not reached, `Some(None)` for the root.
    pub fn parent(&self, station: &Station) -> Option<Option<&'g Station>> {
        self.parents.get(station).copied()
    }

    /// `(station, parent)` entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&'g Station, Option<&'g Station>)> + '_ {
        self.order.iter().map(|&s| (s, self.parents[s]))
    }

    /// Root-to-`target` path along parent pointers; the fewest hops from the root.
    pub fn path_to(&self, target: &Station) -> Option<Vec<&'g Station>> {
        let mut current = self.order.iter().copied().find(|s| *s == target)?;
        let mut path = vec![current];
        while let Some(parent) = self.parents[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}
