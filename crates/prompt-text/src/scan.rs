//! Cross-line word scanning.
//!
//! The scanner treats the buffer as one logical strip of lines with line
//! breaks acting as separators. All scans are codepoint-positional and
//! absorb combining marks into their preceding base character: a word like
//! `cafe\u{301}` ends on the base `e`, never on the accent.
//!
//! Scans return `None` at the document boundaries; callers decide the
//! fallback (end-of-line clamp, origin, or holding position).

use crate::Position;
use crate::classify::{is_combining_mark, is_word_char, is_word_char_or_combining};
use crate::codepoint;

/// Forward scan to the first codepoint of the next word.
///
/// With `skip_current_word` set, the remainder of the word under the start
/// position is skipped first; the scanner then walks over any separator
/// run, crossing line boundaries in order, and stops on the next word
/// character. Returns `None` when no further word exists before the end of
/// the document.
pub fn next_word_start(
    lines: &[String],
    row: usize,
    col: usize,
    skip_current_word: bool,
) -> Option<Position> {
    if lines.is_empty() || row >= lines.len() {
        return None;
    }
    let mut row = row;
    let mut chars = codepoint::chars(&lines[row]);
    let mut col = col.min(chars.len());
    if skip_current_word && col < chars.len() && is_word_char(chars[col]) {
        while col < chars.len() && is_word_char_or_combining(chars[col]) {
            col += 1;
        }
    }
    loop {
        if col >= chars.len() {
            if row + 1 >= lines.len() {
                return None;
            }
            row += 1;
            col = 0;
            chars = codepoint::chars(&lines[row]);
            continue;
        }
        if is_word_char(chars[col]) {
            return Some(Position::new(row, col));
        }
        col += 1;
    }
}

/// Backward scan to the start of the previous word.
///
/// From inside a word the scan lands on that word's first codepoint; from a
/// word's first codepoint or from a separator it lands on the start of the
/// preceding word, crossing line boundaries. Returns `None` at document
/// start.
pub fn prev_word_start(lines: &[String], row: usize, col: usize) -> Option<Position> {
    if lines.is_empty() {
        return None;
    }
    let mut row = row.min(lines.len() - 1);
    let mut chars = codepoint::chars(&lines[row]);
    let mut col = col.min(chars.len());

    // Step onto the codepoint before the start position, crossing to the
    // previous line when at column 0 (empty lines keep walking back).
    loop {
        if col > 0 {
            col -= 1;
            break;
        }
        if row == 0 {
            return None;
        }
        row -= 1;
        chars = codepoint::chars(&lines[row]);
        col = chars.len();
    }

    // Skip the separator run backwards.
    while !is_word_char(chars[col]) {
        if col > 0 {
            col -= 1;
            continue;
        }
        loop {
            if row == 0 {
                return None;
            }
            row -= 1;
            chars = codepoint::chars(&lines[row]);
            if !chars.is_empty() {
                break;
            }
        }
        col = chars.len() - 1;
    }

    // Walk to the first codepoint of this word, combining marks included.
    while col > 0 && is_word_char_or_combining(chars[col - 1]) {
        col -= 1;
    }
    // The walk can halt on a combining run whose base is not a word
    // character; advance back onto the first word codepoint in that case.
    while col < chars.len() && !is_word_char(chars[col]) {
        col += 1;
    }
    Some(Position::new(row, col))
}

/// Column of the last base codepoint of the word containing or following
/// `col`, restricted to this line. Returns `None` when no word exists at or
/// after `col`.
///
/// Callers consult [`is_at_end_of_base_word`] first when a repeated
/// end-of-word motion must step past the current word.
pub fn word_end_in_line(line: &str, col: usize) -> Option<usize> {
    let chars = codepoint::chars(line);
    let mut col = col;
    while col < chars.len() && !is_word_char(chars[col]) {
        col += 1;
    }
    if col >= chars.len() {
        return None;
    }
    // Walk to the last base codepoint, looking one codepoint ahead (past
    // any combining marks) to decide whether the word continues.
    loop {
        let mut probe = col + 1;
        while probe < chars.len() && is_combining_mark(chars[probe]) {
            probe += 1;
        }
        if probe < chars.len() && is_word_char(chars[probe]) {
            col = probe;
        } else {
            return Some(col);
        }
    }
}

/// True when `col` holds a word codepoint whose only followers on this
/// line, before a non-word codepoint or the line end, are combining marks.
/// Detects "already on the last base character of a word" so repeated
/// end-of-word motions advance instead of sticking.
pub fn is_at_end_of_base_word(line: &str, col: usize) -> bool {
    let chars = codepoint::chars(line);
    match chars.get(col) {
        Some(cp) if is_word_char(*cp) => {}
        _ => return false,
    }
    let mut probe = col + 1;
    while probe < chars.len() && is_combining_mark(chars[probe]) {
        probe += 1;
    }
    probe >= chars.len() || !is_word_char(chars[probe])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &str) -> Vec<String> {
        text.split('\n').map(String::from).collect()
    }

    #[test]
    fn next_word_start_within_line() {
        let ls = lines("foo, bar baz");
        assert_eq!(
            next_word_start(&ls, 0, 0, true),
            Some(Position::new(0, 5)),
            "skips current word and the separator run"
        );
        assert_eq!(next_word_start(&ls, 0, 3, true), Some(Position::new(0, 5)));
        assert_eq!(next_word_start(&ls, 0, 5, true), Some(Position::new(0, 9)));
    }

    #[test]
    fn next_word_start_crosses_lines_and_blank_lines() {
        let ls = lines("alpha\n\n  beta gamma");
        assert_eq!(next_word_start(&ls, 0, 0, true), Some(Position::new(2, 2)));
        assert_eq!(next_word_start(&ls, 2, 2, true), Some(Position::new(2, 7)));
        assert_eq!(next_word_start(&ls, 2, 7, true), None, "no word after gamma");
    }

    #[test]
    fn next_word_start_without_skip_stops_on_current_word() {
        let ls = lines("one two");
        assert_eq!(next_word_start(&ls, 0, 0, false), Some(Position::new(0, 0)));
        assert_eq!(next_word_start(&ls, 0, 3, false), Some(Position::new(0, 4)));
    }

    #[test]
    fn prev_word_start_within_line() {
        let ls = lines("foo, bar baz");
        assert_eq!(prev_word_start(&ls, 0, 9), Some(Position::new(0, 5)));
        assert_eq!(prev_word_start(&ls, 0, 5), Some(Position::new(0, 0)));
        assert_eq!(prev_word_start(&ls, 0, 7), Some(Position::new(0, 5)), "mid-word lands on word start");
        assert_eq!(prev_word_start(&ls, 0, 0), None);
    }

    #[test]
    fn prev_word_start_crosses_lines() {
        let ls = lines("alpha\n\nbeta");
        assert_eq!(prev_word_start(&ls, 2, 0), Some(Position::new(0, 0)));
        let ls = lines("one two\nthree");
        assert_eq!(prev_word_start(&ls, 1, 0), Some(Position::new(0, 4)));
    }

    #[test]
    fn word_end_in_line_basic() {
        let line = "foo bar";
        assert_eq!(word_end_in_line(line, 0), Some(2));
        assert_eq!(word_end_in_line(line, 2), Some(2), "scan from the end stays put");
        assert_eq!(word_end_in_line(line, 3), Some(6), "separator start finds the next word");
        assert_eq!(word_end_in_line(line, 7), None);
        assert_eq!(word_end_in_line("", 0), None);
    }

    #[test]
    fn word_end_absorbs_combining_marks() {
        // c a f e ´ : the word ends on the base 'e' at column 3.
        let line = "cafe\u{301}";
        assert_eq!(word_end_in_line(line, 0), Some(3));
        assert_eq!(word_end_in_line(line, 4), None, "trailing mark alone is no word");
    }

    #[test]
    fn combining_marks_do_not_split_words_mid_scan() {
        // e ´ t u d e : one word, end at the final 'e' (column 5).
        let line = "e\u{301}tude!";
        assert_eq!(word_end_in_line(line, 0), Some(5));
        let ls = lines("e\u{301}tude suite");
        assert_eq!(next_word_start(&ls, 0, 0, true), Some(Position::new(0, 7)));
        assert_eq!(prev_word_start(&ls, 0, 7), Some(Position::new(0, 0)));
    }

    #[test]
    fn end_of_base_word_detection() {
        let line = "cafe\u{301} x";
        assert!(is_at_end_of_base_word(line, 3), "base 'e' followed only by a mark");
        assert!(!is_at_end_of_base_word(line, 2), "'f' continues into 'e'");
        assert!(!is_at_end_of_base_word(line, 4), "a mark itself is not a base");
        assert!(is_at_end_of_base_word(line, 6), "single-codepoint word");
        assert!(is_at_end_of_base_word("abc", 2), "line end terminates the word");
        assert!(!is_at_end_of_base_word("abc", 3), "past the line end");
    }
}
