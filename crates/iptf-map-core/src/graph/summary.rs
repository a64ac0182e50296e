//! Short plain-text summaries from document bodies.
//!
//! Heuristic: documents are expected to follow the corpus section-naming
//! convention. Pure string-in, string-out so the convention can change
//! without touching the builder.

use crate::config::SUMMARY_ELLIPSIS;

/// Section titles searched for a summary, in priority order.
pub const SUMMARY_SECTIONS: &[&str] = &["Intent", "TLDR", "What it is", "1) Use Case"];

/// Derive a single-line summary of at most `max_len` characters
/// (plus the ellipsis when truncated).
pub fn extract_summary(body: &str, max_len: usize) -> String {
    let candidate = SUMMARY_SECTIONS
        .iter()
        .find_map(|title| section_first_line(body, title))
        .or_else(|| first_prose_line(body))
        .unwrap_or_default();

    truncate(candidate, max_len)
}

/// First line of a level-2 section's content, bullet marker removed.
fn section_first_line<'a>(body: &'a str, title: &str) -> Option<&'a str> {
    let mut lines = body.lines();
    lines.find(|line| is_level2_heading(line) && heading_text(line) == title)?;

    let line = lines
        .take_while(|line| !is_level2_heading(line))
        .map(str::trim)
        .find(|line| !line.is_empty())?;

    Some(strip_bullet(line))
}

/// Fallback: first line that is not a heading, list, table or emphasis line.
fn first_prose_line(body: &str) -> Option<&str> {
    body.lines()
        .map(str::trim)
        .find(|t| !t.is_empty() && !t.starts_with(['#', '-', '|', '*']))
}

fn is_level2_heading(line: &str) -> bool {
    line.strip_prefix("##")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

fn heading_text(line: &str) -> &str {
    line.trim_start_matches('#').trim()
}

fn strip_bullet(line: &str) -> &str {
    for marker in ['-', '*', '+'] {
        if let Some(rest) = line.strip_prefix(marker) {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }
    line
}

fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{}", &text[..cut], SUMMARY_ELLIPSIS),
        None => text.to_string(),
    }
}
