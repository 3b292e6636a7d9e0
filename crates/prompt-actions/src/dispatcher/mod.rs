//! Dispatcher applying a [`Command`] to a buffer state.
//!
//! Decomposed into focused sub-modules, one per command family:
//! * `motion`    - cursor movement (counts, sticky column)
//! * `edit`      - deletes, changes and insert-mode text edits
//! * `insert`    - mode-adjacent cursor placement (insert/append/open/escape)
//! * `select`    - selection anchor handling
//! * `search`    - literal search and repeat-search
//! * `clipboard` - yank and paste
//! * `history`   - undo and redo
//!
//! [`apply`] owns the state value for the duration of one command and
//! returns the next state; there is no hidden mutable state below it. The
//! match is exhaustive over the closed command set: a new command kind
//! fails to compile until it is handled here, and nowhere is a command
//! silently ignored at runtime.

use crate::{Command, MotionKind};
use prompt_state::BufferState;

mod clipboard;
mod edit;
mod history;
mod insert;
mod motion;
mod search;
mod select;

/// Apply one command, producing the next buffer state.
///
/// Total over the state space: boundary conditions (document start or end,
/// empty clipboard, empty selection, single-line document) clamp or no-op,
/// never error. Callers must treat the returned value as the new canonical
/// state.
pub fn apply(mut state: BufferState, command: Command) -> BufferState {
    let vertical = matches!(
        command,
        Command::Motion {
            kind: MotionKind::Up | MotionKind::Down,
            ..
        }
    );
    match command {
        Command::Motion { kind, count } => motion::handle_motion(kind, count, &mut state),
        Command::Edit { kind, count } => edit::handle_edit(kind, count, &mut state),
        // `i` inserts at the cursor; the position is already correct.
        Command::InsertAtCursor => {}
        Command::AppendAtCursor => insert::append_at_cursor(&mut state),
        Command::OpenLineAbove => insert::open_line_above(&mut state),
        Command::OpenLineBelow => insert::open_line_below(&mut state),
        Command::AppendAtLineEnd => insert::append_at_line_end(&mut state),
        Command::InsertAtLineStart => insert::insert_at_line_start(&mut state),
        Command::EscapeInsert => insert::escape_insert(&mut state),
        Command::SetAnchor => select::set_anchor(&mut state),
        Command::ClearSelection => select::clear_selection(&mut state),
        Command::Search { query, direction } => search::handle_search(&query, direction, &mut state),
        Command::SearchNext { direction, count } => {
            search::handle_search_next(direction, count, &mut state)
        }
        Command::Yank { text } => clipboard::handle_yank(text, &mut state),
        Command::YankSelection => clipboard::handle_yank_selection(&mut state),
        Command::Paste { placement, count } => {
            clipboard::handle_paste(placement, count, &mut state)
        }
        Command::Undo { count } => history::handle_undo(count, &mut state),
        Command::Redo { count } => history::handle_redo(count, &mut state),
    }
    if !vertical {
        // The sticky column survives only uninterrupted vertical motion runs.
        state.preferred_col = None;
    }
    state
}
