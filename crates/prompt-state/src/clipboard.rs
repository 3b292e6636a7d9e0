//! The single implicit clipboard slot.
//!
//! One payload, written by yank operations and read by paste. A trailing
//! line break on the payload is the linewise sentinel: paste then inserts
//! whole lines above or below the cursor line instead of splicing inline.

#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    content: Option<String>,
}

impl Clipboard {
    /// Replace the slot with a new payload.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.content = Some(text.into());
    }

    /// Current payload, if any.
    pub fn get(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Linewise payloads carry a trailing line break.
    pub fn is_linewise(&self) -> bool {
        self.content.as_deref().is_some_and(|s| s.ends_with('\n'))
    }

    /// True when the slot is unset or holds an empty payload.
    pub fn is_empty(&self) -> bool {
        self.content.as_deref().is_none_or(str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_break_marks_linewise() {
        let mut clip = Clipboard::default();
        assert!(clip.is_empty());
        assert!(!clip.is_linewise());

        clip.set("inline text");
        assert!(!clip.is_linewise());
        assert_eq!(clip.get(), Some("inline text"));

        clip.set("whole line\n");
        assert!(clip.is_linewise());
        assert!(!clip.is_empty());
    }

    #[test]
    fn empty_payload_counts_as_empty() {
        let mut clip = Clipboard::default();
        clip.set("");
        assert!(clip.is_empty());
    }
}
