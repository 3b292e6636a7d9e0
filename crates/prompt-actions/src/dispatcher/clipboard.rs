//! Yank and paste.
//!
//! One implicit clipboard slot. A trailing line break on the payload is the
//! linewise sentinel: paste inserts whole lines below (after) or above
//! (before) the cursor line. Characterwise payloads splice inline at
//! `min(col + 1, len)` (after) or `col` (before). Only yanks write the
//! slot; deletes never touch it.

use super::motion::first_non_blank_col;
use super::select::inclusive_end;
use crate::PastePlacement;
use prompt_state::BufferState;
use prompt_text::Position;

pub(crate) fn handle_yank(text: String, state: &mut BufferState) {
    state.clipboard.set(text);
}

/// Copy the ordered, end-inclusive selection into the clipboard. The cursor
/// collapses to the selection start; clearing the anchor afterwards is the
/// mode machine's call.
pub(crate) fn handle_yank_selection(state: &mut BufferState) {
    let Some((start, end)) = state.selection_span() else {
        return;
    };
    let end = inclusive_end(state, end);
    let text = state.extract_range(start, end);
    state.clipboard.set(text);
    state.cursor = start;
}

pub(crate) fn handle_paste(placement: PastePlacement, count: u32, state: &mut BufferState) {
    if state.clipboard.is_empty() {
        return;
    }
    let linewise = state.clipboard.is_linewise();
    let payload = {
        let Some(text) = state.clipboard.get() else {
            return;
        };
        text.repeat(count.max(1) as usize)
    };
    state.push_snapshot();
    if linewise {
        paste_linewise(state, placement, &payload);
    } else {
        paste_charwise(state, placement, &payload);
    }
    tracing::trace!(
        target: "actions.dispatch",
        op = "paste",
        ?placement,
        linewise,
        payload_len = payload.len(),
        "paste"
    );
}

fn paste_linewise(state: &mut BufferState, placement: PastePlacement, payload: &str) {
    let row = state.cursor.row;
    match placement {
        PastePlacement::After => {
            let eol = Position::new(row, state.line_len(row));
            let block = payload.strip_suffix('\n').unwrap_or(payload);
            state.replace_range(eol, eol, &format!("\n{block}"));
            state.cursor = Position::new(row + 1, first_non_blank_col(state.line(row + 1)));
        }
        PastePlacement::Before => {
            let bol = Position::new(row, 0);
            state.replace_range(bol, bol, payload);
            state.cursor = Position::new(row, first_non_blank_col(state.line(row)));
        }
    }
}

fn paste_charwise(state: &mut BufferState, placement: PastePlacement, payload: &str) {
    let Position { row, col } = state.cursor;
    let len = state.line_len(row);
    let at = match placement {
        PastePlacement::After => (col + 1).min(len),
        PastePlacement::Before => col.min(len),
    };
    let at = Position::new(row, at);
    state.replace_range(at, at, payload);
    // Rest on the last inserted codepoint.
    state.cursor.col = state.cursor.col.saturating_sub(1);
}
