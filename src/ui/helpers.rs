//! Small rendering helpers shared by the UI components.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;

/// Finds every non-overlapping occurrence of `query` in `text`,
/// case-insensitively, as half-open char-index ranges.
///
/// An empty query yields no ranges. Matching is done on a char-for-char
/// lowercase view of the text, so the returned indices address `text`'s chars
/// directly.
#[must_use]
pub fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }
    let hay: Vec<char> = text
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();
    let needle: Vec<char> = query
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();
    if needle.len() > hay.len() {
        return vec![];
    }

    let mut ranges = vec![];
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if hay[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Splits `text` into styled spans, applying `highlight` over the given
/// half-open char ranges and `base` elsewhere.
///
/// Ranges must be sorted and non-overlapping, as produced by
/// [`substring_ranges`].
#[must_use]
pub fn highlight_spans<'a>(
    text: &'a str,
    ranges: &[(usize, usize)],
    base: Style,
    highlight: Style,
) -> Vec<Span<'a>> {
    if ranges.is_empty() {
        return vec![Span::styled(text, base)];
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |char_idx: usize| -> usize {
        chars
            .get(char_idx)
            .map_or(text.len(), |&(byte_idx, _)| byte_idx)
    };

    let mut spans = vec![];
    let mut cursor = 0;
    for &(start, end) in ranges {
        if start > cursor {
            spans.push(Span::styled(&text[byte_at(cursor)..byte_at(start)], base));
        }
        spans.push(Span::styled(&text[byte_at(start)..byte_at(end)], highlight));
        cursor = end;
    }
    if byte_at(cursor) < text.len() {
        spans.push(Span::styled(&text[byte_at(cursor)..], base));
    }
    spans
}

/// Centers a rect of the given percentage dimensions within `area`.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}
