/// Turns a human readable label into the local name an IRI is expected to carry.
///
/// The label is lower-cased, spaces and dashes become underscores and apostrophes are dropped.
/// Any other character is kept as is.
///
/// ```
/// use ontospm_owl::normalise_local_name;
///
/// assert_eq!(
///     normalise_local_name("Surgeon's laparoscopic-Scissors"),
///     "surgeons_laparoscopic_scissors"
/// );
/// ```
pub fn normalise_local_name(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' | '-' => Some('_'),
            '\'' => None,
            c => Some(c),
        })
        .collect()
}
