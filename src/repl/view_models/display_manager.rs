//! # Display Management
//!
//! Screen layout and the display lines the renderer paints. All wrapping
//! happens here so the renderer only positions and styles text.

use crate::repl::events::{Region, ViewEvent};
use crate::repl::models::{RequestState, EXAMPLES};
use crate::repl::text::{wrap_input, wrap_words};
use crate::repl::view_models::core::ViewModel;

pub const TITLE: &str = "labelwise · AI Health Co-Pilot";
pub const BANNER: &str =
    "Paste any ingredient list below. The AI analyzes what matters, no filters or configuration needed.";
pub const INPUT_LABEL: &str = "Paste Ingredients";
pub const RESULT_LABEL: &str = "Analysis";
pub const INPUT_PLACEHOLDER: &str = "Example: Whole Wheat Flour, Water, Sugar, Yeast, Salt, Soybean Oil, Preservatives (Calcium Propionate), Enriched Flour...";
pub const IDLE_HINT: &str =
    "Paste an ingredient list and press Enter to see what matters most. F1-F3 load an example.";
pub const LOADING_MESSAGE: &str = "Analyzing ingredients...";
pub const EMPTY_RESULT_MESSAGE: &str = "(the service returned no text)";
pub const DISCLAIMER: &str = "This analysis is AI-generated and for informational purposes only. Always consult healthcare providers for medical advice.";
pub const ANALYZE_LABEL: &str = "[Enter] Analyze Ingredients";
pub const ANALYZING_LABEL: &str = "Analyzing...";

/// Left and right margin of content regions
const MARGIN: u16 = 2;

/// Rows that are always present: title, banner, input label, action row,
/// result label, status bar
const FIXED_ROWS: u16 = 6;

const MAX_INPUT_ROWS: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    Bold,
    Dim,
    Accent,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String,
    pub style: LineStyle,
}

impl DisplayLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn blank() -> Self {
        Self::new("", LineStyle::Normal)
    }
}

/// Row assignment for the current terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub width: u16,
    pub height: u16,
    pub margin: u16,
    pub title_row: u16,
    pub banner_row: u16,
    pub input_label_row: u16,
    pub input_top: u16,
    pub input_height: u16,
    pub action_row: u16,
    pub result_label_row: u16,
    pub result_top: u16,
    pub result_height: u16,
    pub status_row: u16,
}

impl ScreenLayout {
    pub fn new(width: u16, height: u16) -> Self {
        let available = height.saturating_sub(FIXED_ROWS);
        let input_height = (available * 2 / 5)
            .max(available.min(3))
            .min(MAX_INPUT_ROWS);
        let result_height = available - input_height;

        let input_top = 3;
        let action_row = input_top + input_height;
        let result_label_row = action_row + 1;
        let result_top = result_label_row + 1;

        Self {
            width,
            height,
            margin: MARGIN,
            title_row: 0,
            banner_row: 1,
            input_label_row: 2,
            input_top,
            input_height,
            action_row,
            result_label_row,
            result_top,
            result_height,
            status_row: height.saturating_sub(1),
        }
    }

    /// Usable text width inside the margins
    pub fn content_width(&self) -> usize {
        self.width.saturating_sub(self.margin * 2).max(1) as usize
    }

    /// First row and row count of a region
    pub fn region_rows(&self, region: Region) -> (u16, u16) {
        match region {
            Region::Input => (self.input_top, self.input_height),
            Region::Result => (self.result_top, self.result_height),
        }
    }
}

/// Visible input rows and where the cursor sits on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub lines: Vec<DisplayLine>,
    /// Screen (column, row) of the cursor
    pub cursor: (u16, u16),
}

impl ViewModel {
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.terminal_size.0, self.terminal_size.1)
    }

    /// Input rows scrolled so the cursor stays visible
    pub fn input_view(&self) -> InputView {
        let layout = self.layout();
        let width = layout.content_width();
        let rows = layout.input_height as usize;

        if self.ingredients.is_empty() {
            let lines = wrap_words(INPUT_PLACEHOLDER, width)
                .into_iter()
                .take(rows)
                .map(|text| DisplayLine::new(text, LineStyle::Dim))
                .collect();
            return InputView {
                lines,
                cursor: (layout.margin, layout.input_top),
            };
        }

        let wrapped = wrap_input(
            self.ingredients.text(),
            self.ingredients.cursor(),
            width,
        );
        let (cursor_row, cursor_col) = wrapped.cursor;
        let offset = cursor_row.saturating_sub(rows.saturating_sub(1));

        let lines = wrapped
            .lines
            .into_iter()
            .skip(offset)
            .take(rows)
            .map(|text| DisplayLine::new(text, LineStyle::Normal))
            .collect();

        InputView {
            lines,
            cursor: (
                layout.margin + cursor_col as u16,
                layout.input_top + (cursor_row - offset) as u16,
            ),
        }
    }

    /// Every line of the result region, before scrolling
    pub fn result_lines(&self) -> Vec<DisplayLine> {
        let width = self.layout().content_width();
        let styled = |text: &str, style| {
            wrap_words(text, width)
                .into_iter()
                .map(move |line| DisplayLine::new(line, style))
        };

        match &self.state {
            RequestState::Idle => styled(IDLE_HINT, LineStyle::Dim).collect(),
            RequestState::Loading => styled(LOADING_MESSAGE, LineStyle::Accent).collect(),
            RequestState::Failure(error) => {
                styled(&error.to_string(), LineStyle::Error).collect()
            }
            RequestState::Success(result) => {
                let mut lines = Vec::new();
                let paragraphs = result.paragraphs();
                if paragraphs.is_empty() {
                    lines.extend(styled(EMPTY_RESULT_MESSAGE, LineStyle::Dim));
                }
                for (i, paragraph) in paragraphs.iter().enumerate() {
                    if i > 0 {
                        lines.push(DisplayLine::blank());
                    }
                    lines.extend(styled(paragraph, LineStyle::Normal));
                }
                lines.push(DisplayLine::blank());
                lines.extend(styled(DISCLAIMER, LineStyle::Dim));
                lines
            }
        }
    }

    /// Result lines currently in the viewport
    pub fn visible_result_lines(&self) -> Vec<DisplayLine> {
        let rows = self.layout().result_height as usize;
        self.result_lines()
            .into_iter()
            .skip(self.result_scroll)
            .take(rows)
            .collect()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn max_result_scroll(&self) -> usize {
        let rows = self.layout().result_height as usize;
        self.result_lines().len().saturating_sub(rows)
    }

    pub fn scroll_result_down(&mut self, amount: usize) {
        let target = (self.result_scroll + amount).min(self.max_result_scroll());
        self.set_result_scroll(target);
    }

    pub fn scroll_result_up(&mut self, amount: usize) {
        let target = self.result_scroll.saturating_sub(amount);
        self.set_result_scroll(target);
    }

    /// Result viewport height, used as the page size
    pub fn result_page_size(&self) -> usize {
        (self.layout().result_height as usize).max(1)
    }

    fn set_result_scroll(&mut self, target: usize) {
        if target != self.result_scroll {
            self.result_scroll = target;
            self.emit_view_event([ViewEvent::RegionRedrawRequired {
                region: Region::Result,
            }]);
        }
    }

    /// Analyze button and preset labels, as styled segments
    pub fn action_segments(&self) -> Vec<(String, LineStyle)> {
        let button = if self.is_loading() {
            (ANALYZING_LABEL.to_string(), LineStyle::Dim)
        } else if self.can_analyze() {
            (ANALYZE_LABEL.to_string(), LineStyle::Bold)
        } else {
            (ANALYZE_LABEL.to_string(), LineStyle::Dim)
        };

        let mut segments = vec![button, ("   Try: ".to_string(), LineStyle::Dim)];
        for (i, entry) in EXAMPLES.iter().enumerate() {
            segments.push((format!("[F{}] {}  ", i + 1, entry.label), LineStyle::Accent));
        }
        segments
    }

    /// Status bar text: (left, right)
    pub fn status_bar_text(&self) -> (String, String) {
        let left = format!(
            " {} | {} chars",
            self.state.label(),
            self.ingredients.char_count()
        );
        let right = "Enter analyze | F1-F3 examples | Ctrl+U clear | Ctrl+C quit ".to_string();
        (left, right)
    }
}
