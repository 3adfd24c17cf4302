//! Single-line text buffer with a cursor.
//!
//! Editing operations report whether the text changed so the caller knows when
//! to recompute suggestions. Cursor-only movement never counts as a change.

use unicode_segmentation::UnicodeSegmentation;

/// Text and cursor position, in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    value: Vec<char>,
    pos: usize,
}

impl Editor {
    /// Creates an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Characters of the current text.
    pub fn chars(&self) -> &[char] {
        &self.value
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Replaces the text and puts the cursor at the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
    }

    /// Moves the cursor, clamped to the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Inserts text at the cursor. Control characters are dropped.
    pub fn insert(&mut self, s: &str) -> bool {
        let runes: Vec<char> = s.chars().filter(|c| !c.is_control()).collect();
        if runes.is_empty() {
            return false;
        }
        let n = runes.len();
        self.value.splice(self.pos..self.pos, runes);
        self.pos += n;
        true
    }

    /// Inserts a single character at the cursor.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.value.insert(self.pos, ch);
        self.pos += 1;
        true
    }

    /// Backspace.
    pub fn delete_backward(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.value.remove(self.pos - 1);
        self.pos -= 1;
        true
    }

    /// Delete.
    pub fn delete_forward(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.remove(self.pos);
        true
    }

    /// Deletes the word before the cursor along with any whitespace after it.
    pub fn delete_word_backward(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        let head: String = self.value[..self.pos].iter().collect();
        let start_byte = head
            .split_word_bound_indices()
            .rev()
            .find(|(_, w)| !w.trim().is_empty())
            .map_or(0, |(i, _)| i);
        let start = head[..start_byte].chars().count();
        self.value.drain(start..self.pos);
        self.pos = start;
        true
    }

    /// Deletes everything before the cursor.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.value.drain(..self.pos);
        self.pos = 0;
        true
    }

    /// Deletes everything after the cursor.
    pub fn delete_after_cursor(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.truncate(self.pos);
        true
    }

    /// Moves one character left.
    pub fn move_left(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Moves one character right.
    pub fn move_right(&mut self) {
        self.set_cursor(self.pos + 1);
    }

    /// Moves to the start.
    pub fn move_to_start(&mut self) {
        self.pos = 0;
    }

    /// Moves to the end.
    pub fn move_to_end(&mut self) {
        self.pos = self.value.len();
    }
}
