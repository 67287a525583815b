//! # Text Wrapping
//!
//! Width-aware wrapping for the terminal. Prose is wrapped at word boundaries
//! (UAX #29 via unicode-segmentation); the editable input is wrapped per
//! character so the cursor maps to exactly one cell.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of one character; control characters count as zero
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

pub fn str_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Wrap prose at word boundaries. Explicit newlines are kept; words wider than
/// `width` are split by character.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for source_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for token in source_line.split_word_bounds() {
            let token_width = str_width(token);

            if token.trim().is_empty() {
                if current_width == 0 {
                    continue;
                }
                if current_width + token_width <= width {
                    current.push_str(token);
                    current_width += token_width;
                } else {
                    lines.push(current.trim_end().to_string());
                    current.clear();
                    current_width = 0;
                }
                continue;
            }

            if current_width + token_width <= width {
                current.push_str(token);
                current_width += token_width;
                continue;
            }

            if current_width > 0 {
                lines.push(current.trim_end().to_string());
                current.clear();
                current_width = 0;
            }

            for ch in token.chars() {
                let w = char_width(ch);
                if current_width + w > width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += w;
            }
        }

        lines.push(current.trim_end().to_string());
    }

    lines
}

/// Wrapped input text plus the (row, column) cell of the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedInput {
    pub lines: Vec<String>,
    pub cursor: (usize, usize),
}

/// Wrap editable text per character; `cursor` is a character offset
pub fn wrap_input(text: &str, cursor: usize, width: usize) -> WrappedInput {
    let width = width.max(1);
    let mut lines = vec![String::new()];
    let mut column = 0;
    let mut cursor_cell = None;

    for (index, ch) in text.chars().enumerate() {
        if ch == '\n' {
            if index == cursor {
                cursor_cell = Some((lines.len() - 1, column));
            }
            lines.push(String::new());
            column = 0;
            continue;
        }

        let w = char_width(ch);
        if column + w > width && column > 0 {
            lines.push(String::new());
            column = 0;
        }
        if index == cursor {
            cursor_cell = Some((lines.len() - 1, column));
        }
        if let Some(line) = lines.last_mut() {
            line.push(ch);
        }
        column += w;
    }

    let cursor = match cursor_cell {
        Some(cell) => cell,
        None if column >= width => {
            lines.push(String::new());
            (lines.len() - 1, 0)
        }
        None => (lines.len() - 1, column),
    };

    WrappedInput { lines, cursor }
}
