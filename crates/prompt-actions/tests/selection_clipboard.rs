//! Selection-bounded yank/delete and clipboard paste flows.

mod common;

use common::*;
use prompt_actions::{Command, EditKind, MotionKind, PastePlacement, apply};
use prompt_text::Position;

#[test]
fn anchored_selection_yank_spans_lines_inclusively() {
    // Anchor at (0,1), move to (1,1): the yanked text includes the
    // codepoint under the cursor.
    let state = state_at("foo\nbar", 0, 1);
    let state = apply(state, Command::SetAnchor);
    let state = apply(state, motion(MotionKind::Down, 1));
    assert_eq!(state.cursor, Position::new(1, 1));
    let state = apply(state, Command::YankSelection);
    assert_eq!(state.clipboard.get(), Some("oo\nba"));
    assert_eq!(state.cursor, Position::new(0, 1));
}

#[test]
fn selection_yank_with_reversed_endpoints_orders_them() {
    let state = state_at("foo\nbar", 1, 1);
    let state = apply(state, Command::SetAnchor);
    let state = apply(state, motion(MotionKind::Up, 1));
    let state = apply(state, Command::YankSelection);
    assert_eq!(state.clipboard.get(), Some("oo\nba"));
}

#[test]
fn yank_selection_without_anchor_is_a_noop() {
    let state = state_at("abc", 0, 1);
    let state = apply(state, Command::YankSelection);
    assert_eq!(state.clipboard.get(), None);
    assert_eq!(state.cursor, Position::new(0, 1));
}

#[test]
fn selection_delete_through_delete_char() {
    let state = state_at("alpha\nbeta", 0, 2);
    let state = apply(state, Command::SetAnchor);
    let state = apply(state, motion(MotionKind::Down, 1));
    let state = apply(state, edit(EditKind::DeleteChar, 1));
    assert_eq!(lines_of(&state), vec!["alta"]);
    assert_eq!(state.selection_anchor, None);

    let state = apply(state, Command::Undo { count: 1 });
    assert_eq!(lines_of(&state), vec!["alpha", "beta"]);
}

#[test]
fn cleared_selection_restores_plain_delete() {
    let state = state_at("abc", 0, 0);
    let state = apply(state, Command::SetAnchor);
    let state = apply(state, Command::ClearSelection);
    let state = apply(state, edit(EditKind::DeleteChar, 1));
    assert_eq!(lines_of(&state), vec!["bc"]);
}

#[test]
fn linewise_paste_after_appends_below() {
    let state = state_at("abc", 0, 0);
    let state = apply(
        state,
        Command::Yank {
            text: "xyz\n".to_string(),
        },
    );
    let state = apply(
        state,
        Command::Paste {
            placement: PastePlacement::After,
            count: 1,
        },
    );
    assert_eq!(lines_of(&state), vec!["abc", "xyz"]);
    assert_eq!(state.cursor, Position::new(1, 0));
}

#[test]
fn linewise_paste_before_on_first_line() {
    let state = state_at("abc", 0, 1);
    let state = apply(
        state,
        Command::Yank {
            text: "one\ntwo\n".to_string(),
        },
    );
    let state = apply(
        state,
        Command::Paste {
            placement: PastePlacement::Before,
            count: 1,
        },
    );
    assert_eq!(lines_of(&state), vec!["one", "two", "abc"]);
    assert_eq!(state.cursor, Position::new(0, 0));
}

#[test]
fn yanked_selection_pastes_back_characterwise() {
    let state = state_at("foo\nbar", 0, 1);
    let state = apply(state, Command::SetAnchor);
    let state = apply(state, motion(MotionKind::Down, 1));
    let state = apply(state, Command::YankSelection);
    // Paste after the cursor: the two-line fragment splices inline,
    // splitting the origin line around it.
    let state = apply(
        state,
        Command::Paste {
            placement: PastePlacement::After,
            count: 1,
        },
    );
    assert_eq!(lines_of(&state), vec!["fooo", "bao", "bar"]);
    assert_eq!(state.cursor, Position::new(1, 1));
}

#[test]
fn paste_round_trip_after_selection_delete() {
    let state = state_at("hello world", 0, 0);
    let state = apply(state, Command::SetAnchor);
    let state = apply(state, motion(MotionKind::Right, 4));
    let state = apply(state, Command::YankSelection);
    assert_eq!(state.clipboard.get(), Some("hello"));
    let state = apply(state, motion(MotionKind::LineEnd, 1));
    let state = apply(
        state,
        Command::Paste {
            placement: PastePlacement::After,
            count: 1,
        },
    );
    assert_eq!(lines_of(&state), vec!["hello worldhello"]);
    assert_eq!(state.cursor, Position::new(0, 15));
}
