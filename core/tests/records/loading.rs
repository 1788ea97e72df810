use filmpath_core::{CoreError, Record, RecordField, load_records};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_extracted_records_export() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[
            {{"original_title": "toy story", "genres": ["Animation", "Comedy", "Family"],
              "cast": ["Tom Hanks", "Tim Allen"], "crew": ["John Lasseter"],
              "release_year": "1995", "overview": "Led by Woody..."}},
            {{"original_title": "jumanji", "genres": ["Adventure"],
              "cast": ["Robin Williams"], "crew": [],
              "release_year": "1995", "overview": null}}
        ]"#
    )
    .unwrap();

    let records = load_records(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "toy story");
    assert_eq!(records[0].year.as_deref(), Some("1995"));
    assert_eq!(records[0].genres.len(), 3);
    assert_eq!(records[0].field(RecordField::Cast), ["Tom Hanks", "Tim Allen"]);
    assert_eq!(records[1].overview, None);
    assert!(records[1].crew.is_empty());
}

#[test]
fn test_load_records_with_plain_keys_and_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"[{{"title": "Heat", "year": "1995", "cast": ["Al Pacino"]}}]"#).unwrap();

    let records = load_records(file.path()).unwrap();

    assert_eq!(
        records,
        [Record::new("Heat").with_year("1995").with_cast(["Al Pacino"])]
    );
}

#[test]
fn test_load_records_rejects_bad_json() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"title": "not a list"}}"#).unwrap();

    assert!(matches!(load_records(file.path()), Err(CoreError::Json { .. })));
}

#[test]
fn test_load_records_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    match load_records(&dir.path().join("records.json")) {
        Err(CoreError::Io { path, .. }) => assert!(path.ends_with("records.json")),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_members_deduplicates_credits() {
    let record = Record::new("dup").with_cast(["Ann", "Ann", "Bob"]);

    let members = record.members(RecordField::Cast);
    assert_eq!(members.len(), 2);
    assert!(members.contains("Ann"));
    assert!(record.members(RecordField::Crew).is_empty());
}
