/// Whitespace and punctuation cleanup applied before lemmatization.
///
/// Pure and idempotent: collapses runs of spaces and tabs to a single space,
/// strips `?`, `.`, `!` and `,`, and trims the ends.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !['?', '.', '!', ','].contains(c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
