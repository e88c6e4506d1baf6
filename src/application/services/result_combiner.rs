/// Joins per-chunk outputs with a single space, preserving order.
///
/// An empty slice yields an empty string, which callers read as "no result".
pub fn combine_results<S: AsRef<str>>(results: &[S]) -> String {
    results
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}
