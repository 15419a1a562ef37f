use metrograph::{
    MetroGraph, MetroGraphError, SqliteStationStore, Station,
    store::MemoryStationStore,
};

fn station(id: i64, name: &str) -> Station {
    Station::new(id, name, 2.3 + id as f64 / 100.0, 48.8, id % 2 == 0)
}

fn build_graph(names: &[&str], edges: &[(i64, i64)]) -> MetroGraph {
    let store = SqliteStationStore::open_in_memory().expect("store");
    for (idx, name) in names.iter().enumerate() {
        store
            .insert_station(&station(idx as i64 + 1, name))
            .expect("station");
    }
    for &(from, to) in edges {
        store.insert_connection(1, from, to).expect("connection");
    }
    MetroGraph::load(&store).expect("graph")
}

fn ids(stations: &[&Station]) -> Vec<i64> {
    stations.iter().map(|s| s.id()).collect()
}

fn names(stations: &[&Station]) -> Vec<String> {
    stations.iter().map(|s| s.name().to_string()).collect()
}

#[test]
fn test_chain_bfs_and_visit_tree() {
    let graph = build_graph(&["A", "B", "C"], &[(1, 2), (2, 3)]);
    let a = graph.station(1).unwrap();
    let b = graph.station(2).unwrap();
    let c = graph.station(3).unwrap();

    let visit = graph.breadth_first_visit(a).expect("bfs");
    assert_eq!(names(&visit), vec!["A", "B", "C"]);

    let tree = graph.visit_tree(a).expect("tree");
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.root(), a);
    assert_eq!(tree.parent(a), Some(None));
    assert_eq!(tree.parent(b), Some(Some(a)));
    assert_eq!(tree.parent(c), Some(Some(b)));
}

#[test]
fn test_stations_without_edges_only_reach_themselves() {
    let graph = build_graph(&["A", "B"], &[]);
    let a = graph.station(1).unwrap();
    let b = graph.station(2).unwrap();
    assert_eq!(names(&graph.breadth_first_visit(a).unwrap()), vec!["A"]);
    assert_eq!(names(&graph.breadth_first_visit(b).unwrap()), vec!["B"]);

    let tree = graph.visit_tree(a).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.parent(a), Some(None));
    assert_eq!(tree.parent(b), None);
}

#[test]
fn test_unknown_vertex_is_reported_and_graph_is_untouched() {
    let graph = build_graph(&["A", "B"], &[(1, 2)]);
    let stranger = station(77, "Nowhere");

    let err = graph.breadth_first_visit(&stranger).unwrap_err();
    assert!(matches!(err, MetroGraphError::UnknownVertex(77)));
    assert!(!err.is_fatal_load());
    assert!(matches!(
        graph.depth_first_visit(&stranger),
        Err(MetroGraphError::UnknownVertex(77))
    ));
    assert!(matches!(
        graph.visit_tree(&stranger),
        Err(MetroGraphError::UnknownVertex(77))
    ));

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    let a = graph.station(1).unwrap();
    assert_eq!(ids(&graph.breadth_first_visit(a).unwrap()), vec![1, 2]);
}

#[test]
fn test_cycle_is_not_revisited() {
    let graph = build_graph(&["A", "B"], &[(1, 2), (2, 1)]);
    let a = graph.station(1).unwrap();
    assert_eq!(names(&graph.breadth_first_visit(a).unwrap()), vec!["A", "B"]);
    assert_eq!(names(&graph.depth_first_visit(a).unwrap()), vec!["A", "B"]);
    let tree = graph.visit_tree(a).unwrap();
    assert_eq!(tree.parent(graph.station(2).unwrap()), Some(Some(a)));
}

#[test]
fn test_depth_first_descends_before_backtracking() {
    // A -> B, A -> C, B -> D
    let graph = build_graph(&["A", "B", "C", "D"], &[(1, 2), (1, 3), (2, 4)]);
    let a = graph.station(1).unwrap();
    assert_eq!(names(&graph.depth_first_visit(a).unwrap()), vec!["A", "B", "D", "C"]);
    assert_eq!(names(&graph.breadth_first_visit(a).unwrap()), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_traversals_follow_edge_direction() {
    let graph = build_graph(&["A", "B", "C"], &[(1, 2), (3, 2)]);
    let b = graph.station(2).unwrap();
    assert_eq!(ids(&graph.breadth_first_visit(b).unwrap()), vec![2]);
    let c = graph.station(3).unwrap();
    assert_eq!(ids(&graph.depth_first_visit(c).unwrap()), vec![3, 2]);
}

#[test]
fn test_repeated_traversals_are_identical() {
    let graph = build_graph(
        &["A", "B", "C", "D", "E"],
        &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5), (5, 1)],
    );
    let start = graph.station(3).unwrap();
    assert_eq!(
        graph.breadth_first_visit(start).unwrap(),
        graph.breadth_first_visit(start).unwrap()
    );
    assert_eq!(
        graph.depth_first_visit(start).unwrap(),
        graph.depth_first_visit(start).unwrap()
    );
    let first: Vec<_> = graph.visit_tree(start).unwrap().iter().collect();
    let second: Vec<_> = graph.visit_tree(start).unwrap().iter().collect();
    assert_eq!(first, second);
}

#[test]
fn test_visit_tree_path_is_hop_shortest() {
    // A -> B -> C -> D and the shortcut A -> D
    let graph = build_graph(&["A", "B", "C", "D"], &[(1, 2), (2, 3), (3, 4), (1, 4)]);
    let a = graph.station(1).unwrap();
    let d = graph.station(4).unwrap();
    let tree = graph.visit_tree(a).unwrap();
    assert_eq!(names(&tree.path_to(d).unwrap()), vec!["A", "D"]);

    let unreached = build_graph(&["A", "B"], &[]);
    let tree = unreached.visit_tree(unreached.station(1).unwrap()).unwrap();
    assert!(tree.path_to(unreached.station(2).unwrap()).is_none());
}

#[test]
fn test_sqlite_and_memory_stores_build_the_same_graph() {
    let edges = [(1, 2), (2, 3), (3, 1), (2, 4)];
    let sqlite = build_graph(&["A", "B", "C", "D"], &edges);

    let mut memory = MemoryStationStore::new();
    for (idx, name) in ["A", "B", "C", "D"].iter().enumerate() {
        memory = memory.with_station(station(idx as i64 + 1, name));
    }
    for &(from, to) in &edges {
        memory = memory.with_connection(from, to);
    }
    let memory = MetroGraph::load(&memory).expect("graph");

    assert_eq!(sqlite.vertex_count(), memory.vertex_count());
    assert_eq!(sqlite.edge_count(), memory.edge_count());
    for s in sqlite.stations() {
        assert_eq!(
            ids(&sqlite.breadth_first_visit(s).unwrap()),
            ids(&memory.breadth_first_visit(s).unwrap())
        );
    }
}

#[test]
fn test_dangling_connection_fails_the_load() {
    let store = SqliteStationStore::open_in_memory().expect("store");
    store.insert_station(&station(1, "A")).unwrap();
    store.insert_connection(1, 1, 42).unwrap();
    let err = MetroGraph::load(&store).unwrap_err();
    assert!(matches!(err, MetroGraphError::InconsistentData(_)));
    assert!(err.is_fatal_load());
}

#[test]
fn test_duplicate_station_ids_fail_the_load() {
    let store = MemoryStationStore::new()
        .with_station(station(1, "A"))
        .with_station(station(1, "A again"))
        .with_station(station(2, "B"))
        .with_connection(1, 2);
    let err = MetroGraph::load(&store).unwrap_err();
    assert!(matches!(err, MetroGraphError::InconsistentData(_)));
}

#[test]
fn test_store_without_tables_fails_the_load() {
    let store = SqliteStationStore::open(":memory:").expect("store");
    let err = MetroGraph::load(&store).unwrap_err();
    assert!(matches!(err, MetroGraphError::QueryError(_)));
}
