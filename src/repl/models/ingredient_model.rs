//! # Ingredient Model
//!
//! Holds the user's free-text ingredient list and an insertion cursor.
//! The cursor is a character offset, never a byte offset.

/// Editable ingredient text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientModel {
    text: String,
    cursor: usize,
}

impl IngredientModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model holding `text` with the cursor at its end
    pub fn with_text(text: &str) -> Self {
        let mut model = Self::new();
        model.set_text(text);
        model
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a character offset into the text
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the text contains nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the whole text and move the cursor to the end
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert text at the cursor. Returns false if there was nothing to insert.
    pub fn insert(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, text);
        self.cursor += text.chars().count();
        true
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor (delete)
    pub fn delete_at_cursor(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move to the start of the current line
    pub fn move_line_start(&mut self) -> bool {
        let start = self.current_line_start();
        let moved = start != self.cursor;
        self.cursor = start;
        moved
    }

    /// Move to the end of the current line
    pub fn move_line_end(&mut self) -> bool {
        let end = self
            .text
            .chars()
            .enumerate()
            .skip(self.cursor)
            .find(|(_, c)| *c == '\n')
            .map(|(i, _)| i)
            .unwrap_or_else(|| self.char_count());
        let moved = end != self.cursor;
        self.cursor = end;
        moved
    }

    fn current_line_start(&self) -> usize {
        self.text
            .chars()
            .take(self.cursor)
            .enumerate()
            .filter(|(_, c)| *c == '\n')
            .map(|(i, _)| i + 1)
            .last()
            .unwrap_or(0)
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
