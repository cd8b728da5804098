//! Suggestion extraction from free-form model output.
//!
//! Models are asked for three numbered suggestions but routinely reply with
//! bullets, wrapped lines, or plain paragraphs. Parsing never fails: the worst
//! case is an empty list.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Maximum number of suggestions returned for one request.
pub const MAX_SUGGESTIONS: usize = 3;

// `1.` `2)` `3:` or a `-` `*` `•` bullet, plus trailing whitespace
static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+[.):]|[-*•])\s*").expect("valid regex"));
static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Split raw model output into at most [`MAX_SUGGESTIONS`] suggestions.
///
/// A marker line opens a new suggestion; unmarked lines continue the open
/// one. Unmarked lines before the first marker are dropped. With no markers
/// at all, blank-line separated paragraphs are used instead.
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let mut current: Option<String> = None;

    for line in raw.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(marker) = MARKER_RE.find(line) {
            close(&mut current, &mut suggestions);
            current = Some(line[marker.end()..].to_string());
        } else if let Some(open) = current.as_mut() {
            if !open.is_empty() {
                open.push(' ');
            }
            open.push_str(line);
        }
    }
    close(&mut current, &mut suggestions);

    if suggestions.is_empty() {
        suggestions = PARAGRAPH_BREAK_RE
            .split(raw)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn close(current: &mut Option<String>, suggestions: &mut Vec<String>) {
    if let Some(text) = current.take() {
        let text = text.trim();
        if !text.is_empty() {
            suggestions.push(text.to_string());
        }
    }
}
