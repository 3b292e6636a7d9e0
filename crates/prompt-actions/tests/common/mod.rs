#![allow(dead_code)] // Shared across several integration tests; each binary uses a subset.

use prompt_actions::{Command, EditKind, MotionKind};
use prompt_state::BufferState;
use prompt_text::Position;

/// Route engine trace events to the test writer; call at the top of tests
/// that benefit from dispatch traces on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn state_at(text: &str, row: usize, col: usize) -> BufferState {
    let mut state = BufferState::from_text(text);
    state.cursor = Position::new(row, col);
    state
}

pub fn lines_of(state: &BufferState) -> Vec<String> {
    state.lines().to_vec()
}

pub fn motion(kind: MotionKind, count: u32) -> Command {
    Command::Motion { kind, count }
}

pub fn edit(kind: EditKind, count: u32) -> Command {
    Command::Edit { kind, count }
}

pub fn apply_all(state: BufferState, commands: Vec<Command>) -> BufferState {
    commands.into_iter().fold(state, prompt_actions::apply)
}
