use crate::fixtures::{assert_symmetric, cast_record, scenario_records, two_component_records};
use filmpath_core::{CollaborationGraph, GraphConfig, Record, RecordField, build_graph};
use rustc_hash::FxHashSet;

fn set(names: &[&str]) -> FxHashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_build_scenario_graph() {
    let records = scenario_records();
    let graph = build_graph(&records, RecordField::Cast, &GraphConfig::default());

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.neighbors("x"), Some(&set(&["y"])));
    assert_eq!(graph.neighbors("y"), Some(&set(&["x", "z"])));
    assert_eq!(graph.neighbors("z"), Some(&set(&["y"])));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_build_is_symmetric() {
    let records = two_component_records();

    for field in [RecordField::Cast, RecordField::Crew] {
        let graph = build_graph(&records, field, &GraphConfig::default());
        assert_symmetric(&graph);
    }
}

#[test]
fn test_build_empty_records_gives_empty_graph() {
    let records: Vec<Record> = Vec::new();
    let graph = build_graph(&records, RecordField::Cast, &GraphConfig::default());

    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_duplicate_credits_do_not_create_self_loops() {
    let records = vec![cast_record("twice", &["Ann", "Cat", "Ann"])];
    let graph = CollaborationGraph::from_records(&records, RecordField::Cast);

    assert_eq!(graph.neighbors("Ann"), Some(&set(&["Cat"])));
    assert_eq!(graph.neighbors("Cat"), Some(&set(&["Ann"])));
}

#[test]
fn test_single_member_record_keeps_isolated_node() {
    let records = vec![cast_record("solo", &["Lonely"])];
    let graph = CollaborationGraph::from_records(&records, RecordField::Cast);

    assert!(graph.contains("Lonely"));
    assert!(graph.neighbors("Lonely").unwrap().is_empty());
}

#[test]
fn test_self_loops_config_keeps_members_as_own_neighbors() {
    let records = scenario_records();
    let graph = build_graph(&records, RecordField::Cast, &GraphConfig::new(true));

    assert_eq!(graph.neighbors("x"), Some(&set(&["x", "y"])));
    assert_eq!(graph.neighbors("y"), Some(&set(&["x", "y", "z"])));
    assert_eq!(graph.neighbors("z"), Some(&set(&["y", "z"])));
    assert_eq!(graph.edge_count(), 5);
    assert_symmetric(&graph);
}

#[test]
fn test_cast_and_crew_graphs_are_independent() {
    let records = two_component_records();
    let cast = build_graph(&records, RecordField::Cast, &GraphConfig::default());
    let crew = build_graph(&records, RecordField::Crew, &GraphConfig::default());

    assert!(cast.contains("Ann"));
    assert!(!crew.contains("Ann"));
    assert!(crew.contains("Director One"));
    assert_eq!(crew.neighbors("Director One"), Some(&set(&["Editor One"])));
    assert_eq!(crew.neighbors("Editor Two"), Some(&set(&[])));
}

#[test]
fn test_names_are_case_sensitive() {
    let records = vec![cast_record("case", &["ann", "Ann"])];
    let graph = CollaborationGraph::from_records(&records, RecordField::Cast);

    assert_eq!(graph.node_count(), 2);
    assert!(graph.neighbors("ann").unwrap().contains("Ann"));
}

#[test]
fn test_merge_record_matches_full_rebuild() {
    let records = two_component_records();
    let config = GraphConfig::default();

    let mut incremental = build_graph(&records[..3], RecordField::Cast, &config);
    for record in &records[3..] {
        incremental.merge_record(record, RecordField::Cast, &config);
    }

    assert_eq!(incremental, build_graph(&records, RecordField::Cast, &config));
}

#[test]
fn test_graph_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CollaborationGraph>();

    let records = two_component_records();
    let graph = &CollaborationGraph::from_records(&records, RecordField::Cast);
    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["Ann", "Eve"]
            .into_iter()
            .map(|name| scope.spawn(move || graph.neighbors(name).map_or(0, |set| set.len())))
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert_eq!(counts.len(), 2);
    assert!(counts.iter().all(|&count| count > 0));
}
