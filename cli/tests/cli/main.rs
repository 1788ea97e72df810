mod args;

use std::io::Write;
use tempfile::NamedTempFile;

/// Records file with two linked casts and one isolated pair.
pub fn write_records_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[
            {{"original_title": "Heat", "genres": ["Action", "Crime"],
              "cast": ["Al Pacino", "Robert De Niro"], "crew": ["Michael Mann"],
              "release_year": "1995", "overview": "A heist."}},
            {{"original_title": "The Irishman", "genres": ["Crime", "Drama"],
              "cast": ["Robert De Niro", "Joe Pesci"], "crew": ["Martin Scorsese"],
              "release_year": "2019", "overview": null}},
            {{"original_title": "Amélie", "genres": ["Comedy", "Romance"],
              "cast": ["Audrey Tautou", "Mathieu Kassovitz"], "crew": ["Jean-Pierre Jeunet"],
              "release_year": "2001", "overview": "Paris."}}
        ]"#
    )
    .unwrap();
    file
}
