//! Snapshot-based undo/redo.
//!
//! Full copies of the line vector plus cursor, captured immediately before
//! a mutating command; pure motions never snapshot. Consecutive snapshots
//! identical in content and cursor are skipped so that no-op edits do not
//! grow history, and pushing a fresh snapshot invalidates the redo stack.
//! Snapshots are whole copies rather than deltas: restorers may mutate the
//! returned lines freely without corrupting history.

use prompt_text::Position;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use tracing::trace;

/// Default maximum number of snapshots retained.
pub const UNDO_HISTORY_DEFAULT: usize = 200;

#[derive(Debug, Clone)]
struct EditSnapshot {
    lines: Vec<String>,
    cursor: Position,
    hash: u64,
}

#[derive(Debug, Clone)]
pub struct UndoEngine {
    undo_stack: Vec<EditSnapshot>,
    redo_stack: Vec<EditSnapshot>,
    capacity: usize,
}

impl Default for UndoEngine {
    fn default() -> Self {
        Self::with_capacity(UNDO_HISTORY_DEFAULT)
    }
}

impl UndoEngine {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Push a pre-mutation snapshot. Skipped when identical (content and
    /// cursor) to the newest retained snapshot; trims the oldest entry past
    /// capacity; clears the redo stack.
    pub fn push_snapshot(&mut self, lines: Vec<String>, cursor: Position) {
        let hash = snapshot_hash(&lines, cursor);
        if let Some(last) = self.undo_stack.last()
            && last.hash == hash
        {
            trace!(target: "state.undo", undo_depth = self.undo_stack.len(), "snapshot_dedupe_skip");
            return;
        }
        self.undo_stack.push(EditSnapshot {
            lines,
            cursor,
            hash,
        });
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "push_snapshot");
        if self.undo_stack.len() > self.capacity {
            self.undo_stack.remove(0);
            trace!(target: "state.undo", "undo_stack_trimmed");
        }
        self.redo_stack.clear();
    }

    /// Restore the newest snapshot, pushing the pre-undo state onto the
    /// redo stack. Returns false when no history remains.
    pub fn undo(&mut self, lines: &mut Vec<String>, cursor: &mut Position) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(EditSnapshot {
            lines: lines.clone(),
            cursor: *cursor,
            hash: snapshot_hash(lines, *cursor),
        });
        *lines = snapshot.lines;
        *cursor = snapshot.cursor;
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
        true
    }

    /// Reapply the newest undone state. Returns false when nothing was
    /// undone since the last mutation.
    pub fn redo(&mut self, lines: &mut Vec<String>, cursor: &mut Position) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(EditSnapshot {
            lines: lines.clone(),
            cursor: *cursor,
            hash: snapshot_hash(lines, *cursor),
        });
        *lines = snapshot.lines;
        *cursor = snapshot.cursor;
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "redo_pop");
        true
    }
}

fn snapshot_hash(lines: &[String], cursor: Position) -> u64 {
    let mut h = DefaultHasher::new();
    for line in lines {
        h.write(line.as_bytes());
        h.write_u8(b'\n');
    }
    h.write_usize(cursor.row);
    h.write_usize(cursor.col);
    h.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn undo_restores_content_and_cursor() {
        let mut engine = UndoEngine::default();
        let mut current = lines(&["one"]);
        let mut cursor = Position::new(0, 3);
        engine.push_snapshot(current.clone(), cursor);

        current = lines(&["one", "two"]);
        cursor = Position::new(1, 0);
        assert!(engine.undo(&mut current, &mut cursor));
        assert_eq!(current, lines(&["one"]));
        assert_eq!(cursor, Position::new(0, 3));
        assert_eq!(engine.redo_depth(), 1);

        assert!(engine.redo(&mut current, &mut cursor));
        assert_eq!(current, lines(&["one", "two"]));
        assert_eq!(cursor, Position::new(1, 0));
    }

    #[test]
    fn identical_snapshot_is_skipped() {
        let mut engine = UndoEngine::default();
        let content = lines(&["abc"]);
        let cursor = Position::new(0, 1);
        engine.push_snapshot(content.clone(), cursor);
        engine.push_snapshot(content.clone(), cursor);
        assert_eq!(engine.undo_depth(), 1);
        // A cursor move makes the snapshot distinct again.
        engine.push_snapshot(content, Position::new(0, 2));
        assert_eq!(engine.undo_depth(), 2);
    }

    #[test]
    fn push_clears_redo() {
        let mut engine = UndoEngine::default();
        let mut current = lines(&["a"]);
        let mut cursor = Position::origin();
        engine.push_snapshot(current.clone(), cursor);
        current = lines(&["ab"]);
        assert!(engine.undo(&mut current, &mut cursor));
        assert_eq!(engine.redo_depth(), 1);
        engine.push_snapshot(current.clone(), Position::new(0, 1));
        assert_eq!(engine.redo_depth(), 0, "new edit invalidates redo");
    }

    #[test]
    fn history_is_capped() {
        let mut engine = UndoEngine::with_capacity(3);
        for i in 0..10 {
            engine.push_snapshot(lines(&[&format!("line {i}")]), Position::origin());
        }
        assert_eq!(engine.undo_depth(), 3);
        // The newest snapshots survive the trim.
        let mut current = lines(&["current"]);
        let mut cursor = Position::origin();
        assert!(engine.undo(&mut current, &mut cursor));
        assert_eq!(current, lines(&["line 9"]));
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut engine = UndoEngine::default();
        let mut current = lines(&["keep"]);
        let mut cursor = Position::new(0, 2);
        assert!(!engine.undo(&mut current, &mut cursor));
        assert!(!engine.redo(&mut current, &mut cursor));
        assert_eq!(current, lines(&["keep"]));
        assert_eq!(cursor, Position::new(0, 2));
    }
}
