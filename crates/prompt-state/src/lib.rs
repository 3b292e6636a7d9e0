//! Canonical buffer state for the prompt editing engine.
//!
//! [`BufferState`] is the single persistent entity: line vector, cursor,
//! sticky column, selection anchor, clipboard slot, last search query and
//! undo history travel together through the dispatcher as one value. The
//! dispatcher owns the value for the duration of one command and hands back
//! the next state; nothing here is shared or hidden.
//!
//! All structural mutation funnels through [`BufferState::replace_range`].
//! It is the only function allowed to resize `lines`, which keeps the
//! never-empty line-vector invariant enforceable in exactly one place.

pub mod clipboard;
pub mod undo;

use clipboard::Clipboard;
use prompt_config::EngineConfig;
use prompt_text::{Position, codepoint};
use undo::UndoEngine;

/// The complete state of one editing buffer.
#[derive(Debug, Clone)]
pub struct BufferState {
    lines: Vec<String>,
    pub cursor: Position,
    /// Remembered column for vertical motions across lines of differing
    /// length. Cleared by any non-vertical command.
    pub preferred_col: Option<usize>,
    /// Start of an active selection; `None` means no selection.
    pub selection_anchor: Option<Position>,
    pub clipboard: Clipboard,
    /// Most recent search query, kept for repeat-search commands.
    pub last_search: Option<String>,
    /// Whether forward search wraps around the document start.
    pub search_wrap: bool,
    undo: UndoEngine,
}

impl Default for BufferState {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferState {
    /// An empty document: one empty line, cursor at the origin.
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::origin(),
            preferred_col: None,
            selection_anchor: None,
            clipboard: Clipboard::default(),
            last_search: None,
            search_wrap: config.search.wrap,
            undo: UndoEngine::with_capacity(config.history.max_depth),
        }
    }

    /// Build a state over the given text; lines are the `\n`-separated
    /// segments. Empty input still yields the single-empty-line document.
    pub fn from_text(text: &str) -> Self {
        let mut state = Self::new();
        state.lines = text.split('\n').map(String::from).collect();
        debug_assert!(!state.lines.is_empty());
        state
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Content of `row`; rows past the end read as empty (positions are
    /// clamped before use, this keeps read paths total).
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map(String::as_str).unwrap_or("")
    }

    /// Codepoint length of `row`.
    pub fn line_len(&self, row: usize) -> usize {
        codepoint::len(self.line(row))
    }

    /// Codepoint length of the cursor line.
    pub fn current_line_len(&self) -> usize {
        self.line_len(self.cursor.row)
    }

    /// Clamp a position to the document: a valid row, and a column no
    /// greater than that row's length (the end-of-line insert position).
    pub fn clamp_position(&self, pos: Position) -> Position {
        let row = pos.row.min(self.lines.len() - 1);
        Position::new(row, pos.col.min(self.line_len(row)))
    }

    /// Replace the half-open range `[start, end)` with `text`.
    ///
    /// The unaffected prefix of the start line, `text` (re-split on any
    /// embedded line breaks) and the unaffected suffix of the end line are
    /// joined into the new line sequence, and the cursor is positioned at
    /// the end of the inserted text. Positions are clamped and reordered
    /// first, so the call is total. The line vector never drops to zero
    /// length: clearing the whole document leaves a single empty line.
    pub fn replace_range(&mut self, start: Position, end: Position, text: &str) {
        let a = self.clamp_position(start);
        let b = self.clamp_position(end);
        let (start, end) = if a > b { (b, a) } else { (a, b) };

        let prefix = codepoint::slice(self.line(start.row), 0, start.col);
        let suffix = codepoint::slice(self.line(end.row), end.col, self.line_len(end.row));
        let merged = format!("{prefix}{text}{suffix}");
        self.lines
            .splice(start.row..=end.row, merged.split('\n').map(String::from));
        debug_assert!(!self.lines.is_empty());

        let breaks = text.matches('\n').count();
        let col = match text.rsplit_once('\n') {
            Some((_, tail)) => codepoint::len(tail),
            None => start.col + codepoint::len(text),
        };
        self.cursor = Position::new(start.row + breaks, col);
    }

    /// Text of the half-open range `[start, end)`, line boundaries joined
    /// with `\n`. Positions are clamped and reordered as in
    /// [`Self::replace_range`].
    pub fn extract_range(&self, start: Position, end: Position) -> String {
        let a = self.clamp_position(start);
        let b = self.clamp_position(end);
        let (start, end) = if a > b { (b, a) } else { (a, b) };
        if start.row == end.row {
            return codepoint::slice(self.line(start.row), start.col, end.col);
        }
        let mut out = codepoint::slice(self.line(start.row), start.col, self.line_len(start.row));
        for row in start.row + 1..end.row {
            out.push('\n');
            out.push_str(self.line(row));
        }
        out.push('\n');
        out.push_str(&codepoint::slice(self.line(end.row), 0, end.col));
        out
    }

    /// Ordered (start, end) pair of the active selection, comparing row
    /// first then column. `None` without an anchor.
    pub fn selection_span(&self) -> Option<(Position, Position)> {
        let anchor = self.selection_anchor?;
        if anchor > self.cursor {
            Some((self.cursor, anchor))
        } else {
            Some((anchor, self.cursor))
        }
    }

    /// Capture a pre-mutation snapshot. Mutating command handlers call this
    /// before touching the buffer; pure motions never do.
    pub fn push_snapshot(&mut self) {
        let lines = self.lines.clone();
        self.undo.push_snapshot(lines, self.cursor);
    }

    /// Restore the newest snapshot. The selection anchor is dropped: the
    /// range it named may not exist in the restored content.
    pub fn undo(&mut self) -> bool {
        let applied = self.undo.undo(&mut self.lines, &mut self.cursor);
        if applied {
            self.selection_anchor = None;
        }
        applied
    }

    /// Reapply the newest undone snapshot.
    pub fn redo(&mut self) -> bool {
        let applied = self.undo.redo(&mut self.lines, &mut self.cursor);
        if applied {
            self.selection_anchor = None;
        }
        applied
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.undo_depth()
    }
    pub fn redo_depth(&self) -> usize {
        self.undo.redo_depth()
    }
}
