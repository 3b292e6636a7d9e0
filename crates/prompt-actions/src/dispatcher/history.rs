//! Undo / redo dispatch.
//!
//! Thin delegation into the state's snapshot engine; counted commands stop
//! at the first exhausted stack.

use prompt_state::BufferState;

pub(crate) fn handle_undo(count: u32, state: &mut BufferState) {
    for _ in 0..count.max(1) {
        if !state.undo() {
            break;
        }
    }
    tracing::trace!(
        target: "actions.dispatch",
        op = "undo",
        undo_depth = state.undo_depth(),
        redo_depth = state.redo_depth(),
        "undo"
    );
}

pub(crate) fn handle_redo(count: u32, state: &mut BufferState) {
    for _ in 0..count.max(1) {
        if !state.redo() {
            break;
        }
    }
    tracing::trace!(
        target: "actions.dispatch",
        op = "redo",
        undo_depth = state.undo_depth(),
        redo_depth = state.redo_depth(),
        "redo"
    );
}
