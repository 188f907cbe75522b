//! String helpers for log lines and progress messages.

/// Single-line preview of free text, at most `max_chars` characters.
///
/// Runs of whitespace (including newlines) collapse to one space so a
/// multi-line question stays on one log line. Longer text is cut on a
/// character boundary and ends with `…`.
///
/// ```
/// use oneword_domain::preview;
///
/// assert_eq!(preview("What is\n  the capital?", 40), "What is the capital?");
/// assert_eq!(preview("What is the capital of France?", 12), "What is the…");
/// ```
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let kept: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
