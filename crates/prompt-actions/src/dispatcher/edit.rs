//! Edit sub-dispatch (deletes, changes, insert-mode text edits).
//!
//! Every handler snapshots the pre-mutation state, then expresses its
//! mutation as one or more range replacements; nothing in this module
//! touches the line vector directly. Change variants share the delete
//! ranges of their delete counterparts and differ only in where they leave
//! the cursor for the caller's insert mode: deletes rest the cursor on a
//! codepoint cell, changes keep the insertion column (which may sit past
//! the last cell).

use super::motion::first_non_blank_col;
use super::select::inclusive_end;
use crate::offsets::{line_range_offsets, position_from_offsets};
use crate::{ChangeMotion, EditKind};
use prompt_state::BufferState;
use prompt_text::{Position, classify, codepoint, scan};

pub(crate) fn handle_edit(kind: EditKind, count: u32, state: &mut BufferState) {
    let count = count.max(1) as usize;
    let before = state.cursor;
    tracing::trace!(
        target: "actions.dispatch",
        edit = ?kind,
        count,
        row = before.row,
        col = before.col,
        "edit"
    );
    state.push_snapshot();
    match kind {
        EditKind::DeleteChar => {
            delete_char(state, count);
            clamp_to_cell(state);
        }
        EditKind::DeleteWordForward => {
            repeat(state, count, delete_word_forward);
            clamp_to_cell(state);
        }
        EditKind::DeleteWordBackward => repeat(state, count, delete_word_backward),
        EditKind::DeleteWordEnd => {
            repeat(state, count, delete_word_end);
            clamp_to_cell(state);
        }
        EditKind::DeleteLine => delete_lines(state, count),
        EditKind::DeleteToLineEnd => {
            delete_to_line_end(state);
            clamp_to_cell(state);
        }
        EditKind::ChangeWordForward => repeat(state, count, delete_word_forward),
        EditKind::ChangeWordBackward => repeat(state, count, delete_word_backward),
        EditKind::ChangeWordEnd => repeat(state, count, delete_word_end),
        EditKind::ChangeLine => {
            let row = state.cursor.row;
            change_lines(state, row, count);
        }
        EditKind::ChangeToLineEnd => delete_to_line_end(state),
        EditKind::ChangeByMotion(motion) => change_by_motion(state, motion, count),
        EditKind::InsertText(text) => insert_text(state, &text, count),
        EditKind::DeleteBackward => repeat(state, count, delete_backward),
    }
}

fn repeat(state: &mut BufferState, count: usize, step: fn(&mut BufferState)) {
    for _ in 0..count {
        step(state);
    }
}

/// Normal-mode rest position after a delete: on a codepoint cell, never on
/// the end-of-line insert position.
fn clamp_to_cell(state: &mut BufferState) {
    let len = state.current_line_len();
    state.cursor.col = state.cursor.col.min(len.saturating_sub(1));
}

fn delete_char(state: &mut BufferState, count: usize) {
    // With an active selection the char delete consumes the selection
    // (inclusive of the codepoint under the cursor) instead of counting.
    if let Some((start, end)) = state.selection_span() {
        let end = inclusive_end(state, end);
        state.replace_range(start, end, "");
        state.selection_anchor = None;
        return;
    }
    let Position { row, col } = state.cursor;
    let end = (col + count).min(state.line_len(row));
    state.replace_range(Position::new(row, col), Position::new(row, end), "");
}

fn delete_word_forward(state: &mut BufferState) {
    let Position { row, col } = state.cursor;
    let target = match scan::next_word_start(state.lines(), row, col, true) {
        Some(pos) if pos.row == row => pos,
        // The next word lives on a later line (or nowhere): stop at the end
        // of the current line instead of joining lines.
        _ => Position::new(row, state.line_len(row)),
    };
    state.replace_range(Position::new(row, col), target, "");
}

fn delete_word_backward(state: &mut BufferState) {
    let Position { row, col } = state.cursor;
    if let Some(start) = scan::prev_word_start(state.lines(), row, col) {
        state.replace_range(start, Position::new(row, col), "");
    }
}

fn delete_word_end(state: &mut BufferState) {
    let Position { row, col } = state.cursor;
    let line = state.line(row).to_string();
    let from = if scan::is_at_end_of_base_word(&line, col) {
        col + 1
    } else {
        col
    };
    let Some(end) = scan::word_end_in_line(&line, from) else {
        return;
    };
    // The deleted range runs through the word end, trailing combining
    // marks included.
    let chars = codepoint::chars(&line);
    let mut end_excl = end + 1;
    while end_excl < chars.len() && classify::is_combining_mark(chars[end_excl]) {
        end_excl += 1;
    }
    state.replace_range(Position::new(row, col), Position::new(row, end_excl), "");
}

fn delete_lines(state: &mut BufferState, count: usize) {
    let row = state.cursor.row;
    let n = count.min(state.line_count() - row);
    let (mut start, end) = line_range_offsets(row, n, state.lines());
    if row + n >= state.line_count() {
        // Removing through the final line consumes the preceding break.
        start = start.saturating_sub(1);
    }
    let (start_pos, end_pos) = position_from_offsets(start, end, state.lines());
    state.replace_range(start_pos, end_pos, "");
    let new_row = row.min(state.line_count() - 1);
    state.cursor = Position::new(new_row, first_non_blank_col(state.line(new_row)));
}

/// Empty `count` lines starting at `row` into a single line awaiting
/// insertion, keeping the trailing break when lines follow.
fn change_lines(state: &mut BufferState, row: usize, count: usize) {
    let row = row.min(state.line_count() - 1);
    let n = count.min(state.line_count() - row);
    let (start, mut end) = line_range_offsets(row, n, state.lines());
    if row + n < state.line_count() {
        end -= 1;
    }
    let (start_pos, end_pos) = position_from_offsets(start, end, state.lines());
    state.replace_range(start_pos, end_pos, "");
    state.cursor = Position::new(row.min(state.line_count() - 1), 0);
}

fn change_by_motion(state: &mut BufferState, motion: ChangeMotion, count: usize) {
    let Position { row, col } = state.cursor;
    match motion {
        ChangeMotion::Left => {
            let start = col.saturating_sub(count);
            state.replace_range(Position::new(row, start), Position::new(row, col), "");
        }
        ChangeMotion::Right => {
            let end = (col + count).min(state.line_len(row));
            state.replace_range(Position::new(row, col), Position::new(row, end), "");
        }
        // Vertical changes are linewise: the cursor line plus `count`
        // neighbours collapse into one emptied line.
        ChangeMotion::Down => change_lines(state, row, count + 1),
        ChangeMotion::Up => {
            let top = row.saturating_sub(count);
            change_lines(state, top, row - top + 1);
        }
    }
}

fn delete_to_line_end(state: &mut BufferState) {
    let Position { row, col } = state.cursor;
    let len = state.line_len(row);
    state.replace_range(Position::new(row, col), Position::new(row, len), "");
}

fn insert_text(state: &mut BufferState, text: &str, count: usize) {
    if text.is_empty() {
        return;
    }
    let payload = text.repeat(count);
    let at = state.cursor;
    state.replace_range(at, at, &payload);
}

fn delete_backward(state: &mut BufferState) {
    let Position { row, col } = state.cursor;
    if col > 0 {
        state.replace_range(Position::new(row, col - 1), Position::new(row, col), "");
    } else if row > 0 {
        let prev_len = state.line_len(row - 1);
        state.replace_range(Position::new(row - 1, prev_len), Position::new(row, 0), "");
    }
}
