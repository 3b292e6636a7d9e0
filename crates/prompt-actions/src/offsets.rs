//! Flat-offset translation for line-oriented operators.
//!
//! Whole-line operators (delete-lines, change-lines) are expressed through
//! the same half-open range replacement as characterwise edits. The
//! translator maps a "`count` lines starting at `row`" request to flat
//! codepoint offsets over the document (lines joined by single line
//! breaks) and back to row/col pairs, so line-joining arithmetic lives in
//! exactly one place.
//!
//! The returned pair is deliberately raw; callers adjust it for their
//! semantics. Delete-lines extends `start` one codepoint left (the
//! preceding break) when the range reaches the end of the document;
//! change-lines retracts `end` one codepoint (the trailing break) when it
//! does not, keeping one emptied line for insertion.

use prompt_text::{Position, codepoint};

/// Flat codepoint offsets `[start, end)` covering `count` whole lines from
/// `row`. `end` is the offset of the first line after the range, or the
/// total document length when the range reaches the final line. `row` and
/// `count` are clamped to the document.
pub fn line_range_offsets(row: usize, count: usize, lines: &[String]) -> (usize, usize) {
    let row = row.min(lines.len().saturating_sub(1));
    let last = (row + count.max(1)).min(lines.len());
    let mut start = 0;
    for line in &lines[..row] {
        start += codepoint::len(line) + 1;
    }
    let mut end = start;
    for line in &lines[row..last] {
        end += codepoint::len(line) + 1;
    }
    if last == lines.len() && end > 0 {
        end -= 1; // no break after the final line
    }
    (start, end)
}

/// Map flat offsets back to (start, end) positions.
pub fn position_from_offsets(start: usize, end: usize, lines: &[String]) -> (Position, Position) {
    (position_of(start, lines), position_of(end, lines))
}

fn position_of(offset: usize, lines: &[String]) -> Position {
    let mut acc = 0;
    for (row, line) in lines.iter().enumerate() {
        let len = codepoint::len(line);
        // Offsets 0..=len fall inside this row; `len` itself is the break.
        if offset <= acc + len {
            return Position::new(row, offset - acc);
        }
        acc += len + 1;
    }
    let last = lines.len().saturating_sub(1);
    Position::new(last, lines.last().map_or(0, |l| codepoint::len(l)))
}
