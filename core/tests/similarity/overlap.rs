use filmpath_core::overlap_score;

#[test]
fn test_overlap_counts_shared_elements() {
    assert_eq!(overlap_score(["a", "b", "c"], ["b", "c", "d"]), 2);
    assert_eq!(overlap_score(["a"], ["b"]), 0);
}

#[test]
fn test_overlap_is_symmetric() {
    let left = ["Drama", "Crime", "Thriller"];
    let right = ["Crime", "Comedy"];

    assert_eq!(overlap_score(left, right), overlap_score(right, left));
}

#[test]
fn test_overlap_with_itself_is_cardinality() {
    let names = vec!["Ann".to_string(), "Bob".to_string(), "Ann".to_string()];

    assert_eq!(overlap_score(&names, &names), 2);
}

#[test]
fn test_overlap_with_empty_set() {
    let empty: [&str; 0] = [];

    assert_eq!(overlap_score(empty, ["a"]), 0);
    assert_eq!(overlap_score(empty, empty), 0);
}
