//! Command set and dispatcher for the prompt editing engine.
//!
//! [`apply`] is the single entry point to the engine: one fully resolved
//! command in, the next buffer state out. Commands arrive from the
//! keystroke parser with counts already expanded; mode gating happens
//! upstream in the caller's mode machine, so the engine executes whatever
//! it is given.
//!
//! The command set is a closed tagged union matched exhaustively in
//! [`dispatcher`]. Adding a variant without a handler is a compile error;
//! that compile-time exhaustiveness replaces any runtime fallback for
//! unknown commands.

pub mod dispatcher;
pub mod offsets;

pub use dispatcher::apply;

/// Cursor motions.
///
/// All are single-step; the dispatcher repeats them `count` times,
/// re-evaluating every step against the line then under the cursor.
/// `FirstLine`, `LastLine` and `GotoLine` are absolute and consume the
/// count directly (for `GotoLine` the count is the 1-based target line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    WordForward,
    WordBackward,
    WordEnd,
    LineStart,
    LineEnd,
    FirstNonBlank,
    FirstLine,
    LastLine,
    GotoLine,
}

/// Buffer edits. Every edit snapshots the pre-mutation state for undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    DeleteChar,
    DeleteWordForward,
    DeleteWordBackward,
    DeleteWordEnd,
    DeleteLine,
    DeleteToLineEnd,
    ChangeWordForward,
    ChangeWordBackward,
    ChangeWordEnd,
    ChangeLine,
    ChangeToLineEnd,
    ChangeByMotion(ChangeMotion),
    /// Insert-mode text entry; the payload may contain embedded line breaks.
    InsertText(String),
    /// Insert-mode backspace; joins with the previous line at column 0.
    DeleteBackward,
}

/// The four single-key motions an inline change can wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeMotion {
    Left,
    Down,
    Up,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Where a paste lands relative to the cursor (characterwise) or the
/// cursor line (linewise).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PastePlacement {
    Before,
    After,
}

/// A fully resolved editing command.
///
/// Counts default to 1 at the parsing layer; the dispatcher treats 0 as 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Motion { kind: MotionKind, count: u32 },
    Edit { kind: EditKind, count: u32 },
    InsertAtCursor,
    AppendAtCursor,
    OpenLineAbove,
    OpenLineBelow,
    AppendAtLineEnd,
    InsertAtLineStart,
    EscapeInsert,
    SetAnchor,
    ClearSelection,
    Search { query: String, direction: SearchDirection },
    SearchNext { direction: SearchDirection, count: u32 },
    Yank { text: String },
    YankSelection,
    Paste { placement: PastePlacement, count: u32 },
    Undo { count: u32 },
    Redo { count: u32 },
}
