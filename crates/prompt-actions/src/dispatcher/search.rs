//! Literal search.
//!
//! Forward scans start one column after the cursor, continue through the
//! following lines in order and, when wrapping is enabled, resume from the
//! document start up to (but not including) the origin. Matching is plain
//! codepoint comparison; regular expressions belong to a layer above.
//!
//! The query is recorded as the last search even when nothing matches, so
//! a later repeat-search can still use it; an unmatched scan leaves the
//! cursor untouched.

use crate::SearchDirection;
use prompt_state::BufferState;
use prompt_text::{Position, codepoint};

pub(crate) fn handle_search(query: &str, direction: SearchDirection, state: &mut BufferState) {
    state.last_search = Some(query.to_string());
    let moved = scan_once(query, direction, state);
    tracing::trace!(target: "actions.dispatch", op = "search", query_len = query.len(), moved, "search");
}

pub(crate) fn handle_search_next(direction: SearchDirection, count: u32, state: &mut BufferState) {
    let Some(query) = state.last_search.clone() else {
        return;
    };
    for _ in 0..count.max(1) {
        if !scan_once(&query, direction, state) {
            break;
        }
    }
}

fn scan_once(query: &str, direction: SearchDirection, state: &mut BufferState) -> bool {
    if query.is_empty() {
        return false;
    }
    // Reverse scanning is not implemented; both directions currently share
    // the forward scan.
    // TODO: dedicated backward scan for reverse search and reverse repeat.
    let _ = direction;
    match scan_forward(state, query, state.cursor) {
        Some(found) => {
            state.cursor = found;
            true
        }
        None => false,
    }
}

fn scan_forward(state: &BufferState, query: &str, origin: Position) -> Option<Position> {
    let needle = codepoint::chars(query);
    // Rest of the origin line, one past the cursor.
    if let Some(col) = find_in_line(state.line(origin.row), &needle, origin.col + 1) {
        return Some(Position::new(origin.row, col));
    }
    for row in origin.row + 1..state.line_count() {
        if let Some(col) = find_in_line(state.line(row), &needle, 0) {
            return Some(Position::new(row, col));
        }
    }
    if !state.search_wrap {
        return None;
    }
    for row in 0..origin.row {
        if let Some(col) = find_in_line(state.line(row), &needle, 0) {
            return Some(Position::new(row, col));
        }
    }
    // Back on the origin line: only matches strictly before the origin.
    find_in_line(state.line(origin.row), &needle, 0)
        .filter(|col| *col < origin.col)
        .map(|col| Position::new(origin.row, col))
}

/// First codepoint index at or after `from` where `needle` occurs.
fn find_in_line(line: &str, needle: &[char], from: usize) -> Option<usize> {
    let hay = codepoint::chars(line);
    if needle.is_empty() || hay.len() < needle.len() {
        return None;
    }
    (from..=hay.len() - needle.len()).find(|&start| hay[start..start + needle.len()] == *needle)
}
