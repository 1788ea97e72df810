use clap::Parser;
use filmpath::{Args, Command, FieldArg};
use filmpath_core::{DEFAULT_RECOMMENDATIONS, RecordField};

#[test]
fn test_path_defaults_to_cast_graph() {
    let args = Args::try_parse_from(["filmpath", "path", "Al Pacino", "Joe Pesci"]).unwrap();

    match args.command {
        Command::Path { from, to, graph, quiet } => {
            assert_eq!(from, "Al Pacino");
            assert_eq!(to, "Joe Pesci");
            assert_eq!(graph.field, FieldArg::Cast);
            assert!(graph.graph.is_none());
            assert!(!quiet);
        }
        other => panic!("Expected Path command, got {other:?}"),
    }
}

#[test]
fn test_global_options_after_subcommand() {
    let args = Args::try_parse_from([
        "filmpath", "path", "a", "b", "--field", "crew", "--records", "data.json", "-v",
    ])
    .unwrap();

    assert!(args.verbose);
    assert_eq!(args.records.as_deref(), Some(std::path::Path::new("data.json")));
    match args.command {
        Command::Path { graph, .. } => assert_eq!(RecordField::from(graph.field), RecordField::Crew),
        other => panic!("Expected Path command, got {other:?}"),
    }
}

#[test]
fn test_recommend_needs_genre_or_title() {
    assert!(Args::try_parse_from(["filmpath", "recommend"]).is_err());
    assert!(Args::try_parse_from(["filmpath", "recommend", "-g", "Drama", "-t", "Heat"]).is_err());
    assert!(Args::try_parse_from(["filmpath", "recommend", "-g", "Drama", "-y", "1995"]).is_err());
}

#[test]
fn test_recommend_year_belongs_to_title() {
    assert!(Args::try_parse_from(["filmpath", "recommend", "-y", "1995"]).is_err());
    assert!(Args::try_parse_from(["filmpath", "recommend", "-y", "1995", "-g", "Drama"]).is_err());

    let args = Args::try_parse_from(["filmpath", "recommend", "-t", "Heat", "-y", "1995"]).unwrap();
    match args.command {
        Command::Recommend { genre, title, year, .. } => {
            assert!(genre.is_empty());
            assert_eq!(title.as_deref(), Some("Heat"));
            assert_eq!(year.as_deref(), Some("1995"));
        }
        other => panic!("Expected Recommend command, got {other:?}"),
    }
}

#[test]
fn test_saved_graph_has_no_credit_list() {
    let args = Args::try_parse_from(["filmpath", "path", "a", "b", "--field", "crew"]).unwrap();
    match args.command {
        Command::Path { graph, .. } => assert_eq!(graph.credits(), Some(RecordField::Crew)),
        other => panic!("Expected Path command, got {other:?}"),
    }

    let args = Args::try_parse_from(["filmpath", "separation", "a", "--graph", "crew.json"]).unwrap();
    match args.command {
        Command::Separation { graph, .. } => assert_eq!(graph.credits(), None),
        other => panic!("Expected Separation command, got {other:?}"),
    }
}

#[test]
fn test_recommend_genres_and_default_limit() {
    let args = Args::try_parse_from(["filmpath", "recommend", "-g", "Drama", "-g", "Crime"]).unwrap();

    match args.command {
        Command::Recommend { genre, title, limit, .. } => {
            assert_eq!(genre, ["Drama", "Crime"]);
            assert!(title.is_none());
            assert_eq!(limit, DEFAULT_RECOMMENDATIONS);
        }
        other => panic!("Expected Recommend command, got {other:?}"),
    }
}

#[test]
fn test_saved_graph_conflicts_with_self_loops() {
    assert!(
        Args::try_parse_from(["filmpath", "separation", "a", "--graph", "g.json", "--self-loops"]).is_err()
    );
}

#[test]
fn test_export_graph_options() {
    let args = Args::try_parse_from([
        "filmpath", "export-graph", "--out", "cast.json", "--limit", "1000",
    ])
    .unwrap();

    match args.command {
        Command::ExportGraph { out, field, limit, self_loops } => {
            assert_eq!(out, std::path::PathBuf::from("cast.json"));
            assert_eq!(field, FieldArg::Cast);
            assert_eq!(limit, Some(1000));
            assert!(!self_loops);
        }
        other => panic!("Expected ExportGraph command, got {other:?}"),
    }
}
