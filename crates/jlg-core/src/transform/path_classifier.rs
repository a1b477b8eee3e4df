/// The grouping key for a path: its first segment after the leading slash.
/// e.g. "/orders/{id}" → "orders", "/" → ""
pub fn resource_key(full_path: &str) -> &str {
    full_path.split('/').nth(1).unwrap_or_default()
}

/// Drop the leading slash and the resource segment, keeping the rest verbatim.
/// e.g. "/orders/{id}/items" → "{id}/items", "/orders" → ""
///
/// No validation is done on the resource segment; a path without a leading
/// slash loses its first segment instead.
pub fn extract_api_path(full_path: &str) -> &str {
    let after_first = match full_path.find('/') {
        Some(i) => &full_path[i + 1..],
        None => full_path,
    };
    match after_first.find('/') {
        Some(i) => &after_first[i + 1..],
        None => "",
    }
}
