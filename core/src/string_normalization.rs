use unidecode::unidecode;

/// Normalizes a movie title for lookup: ASCII transliteration, lowercase,
/// single spaces between words.
pub fn clean_title(input: &str) -> String {
    unidecode(input)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Collapses runs of whitespace in a person name without touching case.
/// Graph nodes are case-sensitive, so this is the only cleanup applied to
/// names typed on the command line.
pub fn clean_name(input: &str) -> String {
    input.split_whitespace().collect::<Vec<&str>>().join(" ")
}
