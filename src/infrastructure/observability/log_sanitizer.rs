const MAX_VISIBLE_LENGTH: usize = 100;

/// Shortens transcript and reply text for safe logging. Cuts on a char
/// boundary so non-ASCII speech never panics the log path.
pub fn truncate_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    match trimmed.char_indices().nth(MAX_VISIBLE_LENGTH) {
        Some((cut, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..cut],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    }
}
