/// Lowercased, trimmed search text, or `None` when there is nothing to
/// match against.
pub(crate) fn needle(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

pub(crate) fn matches_any<'a>(needle: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    fields.into_iter().any(|f| f.to_lowercase().contains(needle))
}
