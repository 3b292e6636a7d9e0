//! Motion sub-dispatch (cursor movement).
//!
//! Counted motions repeat the single-step motion, re-evaluating each step
//! against the line currently under the cursor; absolute motions
//! (first/last/goto line) consume the count directly. Vertical motions
//! thread the sticky column through `preferred_col` so that crossing a
//! short line and returning to a long one restores the original column.
//!
//! Motions are pure cursor movement: no snapshots, no buffer mutation.

use crate::MotionKind;
use prompt_state::BufferState;
use prompt_text::{Position, codepoint, scan};

pub(crate) fn handle_motion(kind: MotionKind, count: u32, state: &mut BufferState) {
    let count = count.max(1) as usize;
    let before = state.cursor;
    match kind {
        MotionKind::Left => repeat(state, count, left),
        MotionKind::Right => repeat(state, count, right),
        MotionKind::Up => repeat(state, count, up),
        MotionKind::Down => repeat(state, count, down),
        MotionKind::WordForward => repeat(state, count, word_forward),
        MotionKind::WordBackward => repeat(state, count, word_backward),
        MotionKind::WordEnd => repeat(state, count, word_end),
        MotionKind::LineStart => state.cursor.col = 0,
        MotionKind::LineEnd => state.cursor.col = last_cell(state.current_line_len()),
        MotionKind::FirstNonBlank => {
            state.cursor.col = first_non_blank_col(state.line(state.cursor.row));
        }
        MotionKind::FirstLine => goto_line(state, 1),
        MotionKind::LastLine => {
            let last = state.line_count();
            goto_line(state, last);
        }
        MotionKind::GotoLine => goto_line(state, count),
    }
    tracing::trace!(
        target: "actions.dispatch",
        motion = ?kind,
        from_row = before.row,
        from_col = before.col,
        to_row = state.cursor.row,
        to_col = state.cursor.col,
        "motion"
    );
}

fn repeat(state: &mut BufferState, count: usize, step: fn(&mut BufferState)) {
    for _ in 0..count {
        step(state);
    }
}

/// Column of the last codepoint cell (0 on an empty line).
fn last_cell(len: usize) -> usize {
    len.saturating_sub(1)
}

/// First non-whitespace column; an all-blank line clamps to its last cell.
pub(crate) fn first_non_blank_col(line: &str) -> usize {
    let chars = codepoint::chars(line);
    chars
        .iter()
        .position(|cp| !cp.is_whitespace())
        .unwrap_or_else(|| last_cell(chars.len()))
}

fn left(state: &mut BufferState) {
    let len = state.current_line_len();
    state.cursor.col = state.cursor.col.min(last_cell(len)).saturating_sub(1);
}

fn right(state: &mut BufferState) {
    let len = state.current_line_len();
    state.cursor.col = (state.cursor.col + 1).min(last_cell(len));
}

fn up(state: &mut BufferState) {
    if state.cursor.row == 0 {
        return;
    }
    let target = remembered_col(state);
    state.cursor.row -= 1;
    state.cursor.col = target.min(last_cell(state.current_line_len()));
}

fn down(state: &mut BufferState) {
    if state.cursor.row + 1 >= state.line_count() {
        return;
    }
    let target = remembered_col(state);
    state.cursor.row += 1;
    state.cursor.col = target.min(last_cell(state.current_line_len()));
}

fn remembered_col(state: &mut BufferState) -> usize {
    match state.preferred_col {
        Some(col) => col,
        None => {
            state.preferred_col = Some(state.cursor.col);
            state.cursor.col
        }
    }
}

fn word_forward(state: &mut BufferState) {
    let Position { row, col } = state.cursor;
    match scan::next_word_start(state.lines(), row, col, true) {
        Some(pos) => state.cursor = pos,
        None => {
            // Document end: clamp to the last codepoint of the buffer.
            let last = state.line_count() - 1;
            state.cursor = Position::new(last, last_cell(state.line_len(last)));
        }
    }
}

fn word_backward(state: &mut BufferState) {
    let Position { row, col } = state.cursor;
    match scan::prev_word_start(state.lines(), row, col) {
        Some(pos) => state.cursor = pos,
        None => state.cursor = Position::origin(),
    }
}

fn word_end(state: &mut BufferState) {
    let Position { row, col } = state.cursor;
    // A repeated end-of-word motion must progress: step off the current
    // word's final base codepoint before scanning again.
    let from = if scan::is_at_end_of_base_word(state.line(row), col) {
        col + 1
    } else {
        col
    };
    if let Some(end) = scan::word_end_in_line(state.line(row), from) {
        state.cursor.col = end;
        return;
    }
    for next_row in row + 1..state.line_count() {
        if let Some(end) = scan::word_end_in_line(state.line(next_row), 0) {
            state.cursor = Position::new(next_row, end);
            return;
        }
    }
    // No further word end: hold position rather than drifting onto a
    // trailing separator or combining mark.
}

fn goto_line(state: &mut BufferState, line: usize) {
    let row = line.saturating_sub(1).min(state.line_count() - 1);
    state.cursor = Position::new(row, first_non_blank_col(state.line(row)));
}
