//! # View Layer
//!
//! Paints the ViewModel onto a [`RenderStream`]. The renderer owns no state
//! beyond the terminal size; every row is rebuilt from the ViewModel's
//! display lines on each redraw.

use crate::repl::events::{Region, ViewEvent};
use crate::repl::io::RenderStream;
use crate::repl::text::char_width;
use crate::repl::view_models::{
    DisplayLine, LineStyle, ScreenLayout, ViewModel, BANNER, INPUT_LABEL, RESULT_LABEL, TITLE,
};
use anyhow::Result;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! queue_term {
    ($($arg:expr),* $(,)?) => {
        queue!($($arg),*).map_err(anyhow::Error::from)
    };
}

/// Dark gray used for the status bar
const STATUS_COLOR: Color = Color::AnsiValue(240);

/// Trait for rendering views
pub trait ViewRenderer {
    /// Initialize the terminal for rendering
    fn initialize(&mut self) -> Result<()>;

    /// Render the full application state
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render only one region
    fn render_region(&mut self, view_model: &ViewModel, region: Region) -> Result<()>;

    /// Update cursor position only
    fn render_cursor(&mut self, view_model: &ViewModel) -> Result<()>;

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Handle view events
    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()>;

    /// Cleanup terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Terminal renderer generic over its output stream
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    fn apply_style(&mut self, style: LineStyle) -> Result<()> {
        match style {
            LineStyle::Normal => Ok(()),
            LineStyle::Bold => queue_term!(self.render_stream, SetAttribute(Attribute::Bold)),
            LineStyle::Dim => queue_term!(self.render_stream, SetForegroundColor(Color::DarkGrey)),
            LineStyle::Accent => queue_term!(self.render_stream, SetForegroundColor(Color::Cyan)),
            LineStyle::Error => queue_term!(self.render_stream, SetForegroundColor(Color::Red)),
        }
    }

    fn reset_style(&mut self) -> Result<()> {
        queue_term!(
            self.render_stream,
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }

    /// Paint styled segments on one row inside the margins. The row is
    /// cleared first and text past the content width is cut.
    fn paint_row(&mut self, layout: &ScreenLayout, row: u16, segments: &[(&str, LineStyle)]) -> Result<()> {
        if row >= layout.height {
            return Ok(());
        }

        self.render_stream.move_cursor(0, row)?;
        queue_term!(self.render_stream, Clear(ClearType::CurrentLine))?;
        queue_term!(self.render_stream, Print(" ".repeat(layout.margin as usize)))?;

        let mut remaining = layout.content_width();
        for (text, style) in segments {
            if remaining == 0 {
                break;
            }
            let (fitted, used) = fit_to_width(text, remaining);
            remaining -= used;

            self.apply_style(*style)?;
            queue_term!(self.render_stream, Print(fitted))?;
            self.reset_style()?;
        }
        Ok(())
    }

    fn paint_line(&mut self, layout: &ScreenLayout, row: u16, line: &DisplayLine) -> Result<()> {
        self.paint_row(layout, row, &[(line.text.as_str(), line.style)])
    }

    /// Paint `lines` into a region, blanking rows past the end
    fn paint_region_lines(
        &mut self,
        layout: &ScreenLayout,
        region: Region,
        lines: &[DisplayLine],
    ) -> Result<()> {
        let (top, height) = layout.region_rows(region);
        let blank = DisplayLine::blank();
        for offset in 0..height {
            let line = lines.get(offset as usize).unwrap_or(&blank);
            self.paint_line(layout, top + offset, line)?;
        }
        Ok(())
    }

    fn paint_header(&mut self, layout: &ScreenLayout) -> Result<()> {
        self.paint_row(layout, layout.title_row, &[(TITLE, LineStyle::Bold)])?;
        self.paint_row(layout, layout.banner_row, &[(BANNER, LineStyle::Dim)])?;
        self.paint_row(layout, layout.input_label_row, &[(INPUT_LABEL, LineStyle::Bold)])
    }

    fn paint_action_row(&mut self, layout: &ScreenLayout, view_model: &ViewModel) -> Result<()> {
        let segments = view_model.action_segments();
        let borrowed: Vec<(&str, LineStyle)> = segments
            .iter()
            .map(|(text, style)| (text.as_str(), *style))
            .collect();
        self.paint_row(layout, layout.action_row, &borrowed)
    }

    fn paint_result_label(&mut self, layout: &ScreenLayout, view_model: &ViewModel) -> Result<()> {
        let max_scroll = view_model.max_result_scroll();
        let indicator = if max_scroll > 0 {
            format!(
                "  [{}/{}] PgUp/PgDn to scroll",
                view_model.result_scroll() + 1,
                max_scroll + 1
            )
        } else {
            String::new()
        };
        self.paint_row(
            layout,
            layout.result_label_row,
            &[(RESULT_LABEL, LineStyle::Bold), (indicator.as_str(), LineStyle::Dim)],
        )
    }

    fn paint_input(&mut self, layout: &ScreenLayout, view_model: &ViewModel) -> Result<()> {
        let view = view_model.input_view();
        self.paint_region_lines(layout, Region::Input, &view.lines)?;
        // Button state follows the text
        self.paint_action_row(layout, view_model)
    }

    fn paint_result(&mut self, layout: &ScreenLayout, view_model: &ViewModel) -> Result<()> {
        self.paint_result_label(layout, view_model)?;
        let lines = view_model.visible_result_lines();
        self.paint_region_lines(layout, Region::Result, &lines)
    }

    fn flush(&mut self) -> Result<()> {
        self.render_stream.flush().map_err(anyhow::Error::from)
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enter_form()?;
        self.render_stream.clear_screen()?;
        self.flush()
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        let layout = view_model.layout();
        tracing::debug!("render_full: {}x{}", layout.width, layout.height);

        self.render_stream.set_cursor_visible(false)?;
        self.render_stream.clear_screen()?;

        self.paint_header(&layout)?;
        self.paint_input(&layout, view_model)?;
        self.paint_result(&layout, view_model)?;
        self.render_status_bar(view_model)?;
        self.render_cursor(view_model)
    }

    fn render_region(&mut self, view_model: &ViewModel, region: Region) -> Result<()> {
        let layout = view_model.layout();
        self.render_stream.set_cursor_visible(false)?;
        match region {
            Region::Input => self.paint_input(&layout, view_model)?,
            Region::Result => self.paint_result(&layout, view_model)?,
        }
        self.render_cursor(view_model)
    }

    fn render_cursor(&mut self, view_model: &ViewModel) -> Result<()> {
        let layout = view_model.layout();
        if layout.input_height == 0 {
            self.render_stream.set_cursor_visible(false)?;
            return self.flush();
        }

        let (column, row) = view_model.input_view().cursor;
        self.render_stream
            .move_cursor(column.min(layout.width.saturating_sub(1)), row)?;
        self.render_stream.set_cursor_visible(true)?;
        self.flush()
    }

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let layout = view_model.layout();
        if layout.height == 0 {
            return Ok(());
        }

        let (left, right) = view_model.status_bar_text();
        let width = layout.width as usize;
        let (left, left_width) = fit_to_width(&left, width);
        let (right, right_width) = fit_to_width(&right, width - left_width);
        let padding = width - left_width - right_width;

        self.render_stream.move_cursor(0, layout.status_row)?;
        queue_term!(
            self.render_stream,
            Clear(ClearType::CurrentLine),
            SetForegroundColor(STATUS_COLOR),
            Print(format!("{}{}{}", left, " ".repeat(padding), right)),
            ResetColor
        )
    }

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => {
                self.render_full(view_model)?;
            }
            ViewEvent::RegionRedrawRequired { region } => {
                self.render_region(view_model, *region)?;
            }
            ViewEvent::StatusBarUpdateRequired => {
                self.render_status_bar(view_model)?;
                self.render_cursor(view_model)?;
            }
            ViewEvent::CursorUpdateRequired => {
                self.render_cursor(view_model)?;
            }
        }
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.leave_form()?;
        self.flush()
    }
}

/// Longest prefix of `text` whose display width fits `width`, and that width
fn fit_to_width(text: &str, width: usize) -> (&str, usize) {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        let w = char_width(ch);
        if used + w > width {
            return (&text[..index], used);
        }
        used += w;
    }
    (text, used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::io::{MockRenderHandle, MockRenderStream, RenderCommand};
    use crate::repl::services::{AnalysisCompletion, ContentSegment, MessagesResponse};
    use crate::repl::view_models::{DISCLAIMER, INPUT_PLACEHOLDER};

    fn create_renderer() -> (TerminalRenderer<MockRenderStream>, MockRenderHandle) {
        let stream = MockRenderStream::with_size((100, 30));
        let handle = stream.handle();
        (TerminalRenderer::with_render_stream(stream).unwrap(), handle)
    }

    fn create_view_model() -> ViewModel {
        let mut vm = ViewModel::new();
        vm.update_terminal_size(100, 30);
        vm
    }

    #[test]
    fn renderer_should_take_size_from_stream() {
        let (mut renderer, _) = create_renderer();
        assert_eq!(renderer.terminal_size(), (100, 30));

        renderer.update_size(120, 40);
        assert_eq!(renderer.terminal_size(), (120, 40));
    }

    #[test]
    fn initialize_and_cleanup_should_enter_and_leave_form() {
        let (mut renderer, handle) = create_renderer();

        renderer.initialize().unwrap();
        renderer.cleanup().unwrap();

        assert_eq!(
            handle.commands(),
            vec![
                RenderCommand::EnterForm,
                RenderCommand::ClearScreen,
                RenderCommand::Flush,
                RenderCommand::LeaveForm,
                RenderCommand::Flush,
            ]
        );
    }

    #[test]
    fn full_render_should_show_form_and_placeholder() {
        let (mut renderer, handle) = create_renderer();
        let vm = create_view_model();

        renderer.render_full(&vm).unwrap();
        let output = handle.plain_output();

        assert!(output.contains(TITLE));
        assert!(output.contains(INPUT_LABEL));
        assert!(output.contains(RESULT_LABEL));
        assert!(output.contains(&INPUT_PLACEHOLDER[..20]));
        assert!(output.contains("[F1] Protein Bar"));
    }

    #[test]
    fn full_render_should_place_cursor_in_input() {
        let (mut renderer, handle) = create_renderer();
        let mut vm = create_view_model();
        vm.insert_text("Sugar");

        renderer.render_full(&vm).unwrap();

        let layout = vm.layout();
        let commands = handle.commands();
        let last_move = commands
            .iter()
            .rev()
            .find(|c| matches!(c, RenderCommand::MoveCursor(..)));
        assert_eq!(
            last_move,
            Some(&RenderCommand::MoveCursor(layout.margin + 5, layout.input_top))
        );
        assert_eq!(commands.last(), Some(&RenderCommand::Flush));
    }

    #[test]
    fn result_region_should_show_paragraphs_and_disclaimer() {
        let (mut renderer, handle) = create_renderer();
        let mut vm = create_view_model();
        vm.insert_text("Salt");
        let ticket = vm.request_analysis().unwrap();
        vm.apply_completion(AnalysisCompletion {
            sequence: ticket.sequence,
            outcome: Ok(MessagesResponse {
                content: vec![ContentSegment::Text {
                    text: "Low sugar overall.".to_string(),
                }],
            }),
        });

        renderer.render_region(&vm, Region::Result).unwrap();
        let output = handle.plain_output();

        assert!(output.contains("Low sugar overall."));
        assert!(output.contains(&DISCLAIMER[..30]));
    }

    #[test]
    fn status_bar_should_show_state_label() {
        let (mut renderer, handle) = create_renderer();
        let mut vm = create_view_model();
        vm.insert_text("Salt");
        vm.request_analysis();

        renderer.render_status_bar(&vm).unwrap();

        assert!(handle.plain_output().contains("ANALYZING"));
    }

    #[test]
    fn fit_to_width_should_respect_wide_chars() {
        assert_eq!(fit_to_width("hello", 3), ("hel", 3));
        assert_eq!(fit_to_width("日本語", 5), ("日本", 4));
        assert_eq!(fit_to_width("ok", 10), ("ok", 2));
    }
}
