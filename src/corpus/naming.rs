// File-name convention for author identifiers.
//
// Speech files are named like `Nomination_Chirac1.txt` or
// `Inauguration_Nomination_Macron.txt`: a fixed marker, then the author, then
// a digit (several speeches by the same author) or the extension dot. This is
// a string convention, not a structured identifier, so every caller that needs
// an author goes through `author_id` rather than splitting names itself.

/// Extract the author identifier from a file name.
///
/// Takes the segment after the first occurrence of `marker` and truncates it
/// at the first digit or period.
///
/// Assumptions, which a future corpus may violate:
/// - the marker appears in the name (otherwise `None`)
/// - the author itself contains no digits or periods
/// - a name with nothing between the marker and the terminator has no author
///   (`None`)
pub fn author_id(file_name: &str, marker: &str) -> Option<String> {
    let (_, after) = file_name.split_once(marker)?;
    let end = after
        .find(|c: char| c.is_ascii_digit() || c == '.')
        .unwrap_or(after.len());
    let author = &after[..end];
    if author.is_empty() {
        None
    } else {
        Some(author.to_string())
    }
}
