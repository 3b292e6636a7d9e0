//! Selection anchor handling.
//!
//! The anchor marks where a visual selection began; the selection itself is
//! always the ordered (anchor, cursor) pair computed on demand by
//! `BufferState::selection_span`. Which mode the host is in is not the
//! engine's business — it only stores and clears the anchor.

use prompt_state::BufferState;
use prompt_text::Position;

pub(crate) fn set_anchor(state: &mut BufferState) {
    state.selection_anchor = Some(state.cursor);
}

pub(crate) fn clear_selection(state: &mut BufferState) {
    state.selection_anchor = None;
}

/// Selection ends are inclusive of the codepoint under the cursor; the
/// replacement primitive takes an exclusive end, so callers widen by one
/// column (clamped to the line length).
pub(crate) fn inclusive_end(state: &BufferState, end: Position) -> Position {
    Position::new(end.row, (end.col + 1).min(state.line_len(end.row)))
}
