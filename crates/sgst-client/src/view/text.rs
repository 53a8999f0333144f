/// Cut `text` to `max` characters, appending `...` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Table cell for a nullable column: `-` when absent or blank.
pub fn cell(value: Option<&str>, max: usize) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => truncate(v, max),
        None => "-".to_string(),
    }
}
