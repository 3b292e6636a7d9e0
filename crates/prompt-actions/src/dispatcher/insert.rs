//! Mode-adjacent cursor placement.
//!
//! The engine is mode-agnostic: these handlers place the cursor (and, for
//! the open-line commands, mutate the buffer) so that the caller's mode
//! machine can enter insert mode afterwards. Nothing here tracks the mode
//! itself. Only the open-line commands mutate, so only they snapshot.

use prompt_state::BufferState;
use prompt_text::{Position, codepoint};

/// `a`: insert after the cursor codepoint.
pub(crate) fn append_at_cursor(state: &mut BufferState) {
    let len = state.current_line_len();
    state.cursor.col = (state.cursor.col + 1).min(len);
}

/// `O`: open an empty line above the cursor line.
pub(crate) fn open_line_above(state: &mut BufferState) {
    state.push_snapshot();
    let row = state.cursor.row;
    let bol = Position::new(row, 0);
    state.replace_range(bol, bol, "\n");
    state.cursor = Position::new(row, 0);
}

/// `o`: open an empty line below the cursor line.
pub(crate) fn open_line_below(state: &mut BufferState) {
    state.push_snapshot();
    let row = state.cursor.row;
    let eol = Position::new(row, state.line_len(row));
    state.replace_range(eol, eol, "\n");
}

/// `A`: insert at the end-of-line position.
pub(crate) fn append_at_line_end(state: &mut BufferState) {
    state.cursor.col = state.current_line_len();
}

/// `I`: insert before the first non-blank codepoint (end of line when the
/// line is all blank).
pub(crate) fn insert_at_line_start(state: &mut BufferState) {
    let col = {
        let line = state.line(state.cursor.row);
        line.chars()
            .position(|cp| !cp.is_whitespace())
            .unwrap_or_else(|| codepoint::len(line))
    };
    state.cursor.col = col;
}

/// Leaving insert retreats one column and rests on a codepoint cell.
pub(crate) fn escape_insert(state: &mut BufferState) {
    let len = state.current_line_len();
    state.cursor.col = state.cursor.col.min(len).saturating_sub(1);
}
