//! # Application Controller
//!
//! The controller orchestrates the components and runs the event loop.
//! It connects user input to commands, hands analysis tickets to the service,
//! feeds finished requests back into the view model and coordinates redraws.

use crate::config::AnalyzerConfig;
use crate::repl::{
    commands::{
        CommandContext, CommandEvent, CommandRegistry, MovementDirection, ScrollDirection,
        ViewModelSnapshot,
    },
    events::{Region, ViewEvent},
    io::{EventStream, RenderStream},
    services::AnalysisService,
    view_models::ViewModel,
    views::{TerminalRenderer, ViewRenderer},
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::sync::Arc;
use std::time::Duration;

/// How long one loop iteration waits for terminal input
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    analysis_service: AnalysisService,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create the controller with injected I/O streams
    pub fn with_io_streams(
        config: Arc<AnalyzerConfig>,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let mut view_model = ViewModel::new();
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        // Synchronize view model with actual terminal size
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);
        view_model.collect_pending_view_events();

        tracing::debug!(
            "Controller ready: endpoint={}, model={}, api key {}",
            config.endpoint,
            config.model,
            if config.has_api_key() { "set" } else { "missing" }
        );

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            analysis_service: AnalysisService::new(config),
            event_stream,
            should_quit: false,
        })
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        let outcome = self.start_and_loop().await;

        // Restore the terminal even when setup or the loop failed
        let restored = self.view_renderer.cleanup();
        if let Err(e) = &restored {
            tracing::error!("Failed to restore terminal: {e:#}");
        }
        outcome.and(restored)
    }

    async fn start_and_loop(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.view_renderer.render_full(&self.view_model)?;
        self.event_loop().await
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            self.drain_completions()?;

            if let Some(event) = self.event_stream.next_event(EVENT_POLL_INTERVAL)? {
                self.process_event(event)?;
            }

            // Let spawned requests progress on a single-threaded runtime
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Apply every finished request waiting on the channel
    fn drain_completions(&mut self) -> Result<()> {
        let mut applied = false;
        while let Some(completion) = self.analysis_service.poll_completion() {
            applied |= self.view_model.apply_completion(completion);
        }
        if applied {
            self.render_pending()?;
        }
        Ok(())
    }

    /// Handle one terminal event and redraw what changed
    pub fn process_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.process_key_event(key_event)?;
            }
            Event::Paste(text) => {
                tracing::debug!("Pasted {} bytes", text.len());
                self.view_model.insert_text(&normalize_line_endings(&text));
            }
            Event::Resize(width, height) => {
                self.view_model.update_terminal_size(width, height);
                self.view_renderer.update_size(width, height);
            }
            _ => {}
        }

        if !self.should_quit {
            self.render_pending()?;
        }
        Ok(())
    }

    fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));
        let events = self.command_registry.process_event(key_event, &context)?;

        for event in events {
            self.apply_command_event(event)?;
        }
        Ok(())
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) -> Result<()> {
        match event {
            CommandEvent::TextInsertRequested { text } => {
                self.view_model.insert_text(&text);
            }
            CommandEvent::TextDeleteRequested { direction } => match direction {
                MovementDirection::Right => self.view_model.delete_char_after_cursor(),
                _ => self.view_model.delete_char_before_cursor(),
            },
            CommandEvent::CursorMoveRequested { direction } => match direction {
                MovementDirection::Left => self.view_model.move_cursor_left(),
                MovementDirection::Right => self.view_model.move_cursor_right(),
                MovementDirection::LineStart => self.view_model.move_cursor_to_line_start(),
                MovementDirection::LineEnd => self.view_model.move_cursor_to_line_end(),
            },
            CommandEvent::InputClearRequested => {
                self.view_model.clear_input();
            }
            CommandEvent::AnalysisRequested => {
                if let Some(ticket) = self.view_model.request_analysis() {
                    self.analysis_service.submit(ticket);
                }
            }
            CommandEvent::ExampleLoadRequested { index } => {
                self.view_model.load_example(index)?;
            }
            CommandEvent::ResultScrollRequested { direction, amount } => match direction {
                ScrollDirection::Down => self.view_model.scroll_result_down(amount),
                ScrollDirection::Up => self.view_model.scroll_result_up(amount),
            },
            CommandEvent::QuitRequested => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            CommandEvent::NoAction => {}
        }
        Ok(())
    }

    /// Wait up to `timeout` for the next finished request and apply it.
    /// Returns whether the view model accepted it.
    pub async fn await_analysis(&mut self, timeout: Duration) -> Result<bool> {
        let completion = tokio::time::timeout(timeout, self.analysis_service.next_completion())
            .await
            .map_err(|_| anyhow::anyhow!("No analysis finished within {timeout:?}"))?
            .ok_or_else(|| anyhow::anyhow!("Analysis channel closed"))?;

        let applied = self.view_model.apply_completion(completion);
        self.render_pending()?;
        Ok(applied)
    }

    fn render_pending(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        self.process_view_events(view_events)
    }

    /// Collapse a batch of view events into the cheapest set of redraws
    fn process_view_events(&mut self, view_events: Vec<ViewEvent>) -> Result<()> {
        if view_events.is_empty() {
            return Ok(());
        }

        if view_events.contains(&ViewEvent::FullRedrawRequired) {
            return self.view_renderer.render_full(&self.view_model);
        }

        let mut rendered = false;
        for region in Region::all() {
            if view_events.contains(&ViewEvent::RegionRedrawRequired { region }) {
                self.view_renderer.render_region(&self.view_model, region)?;
                rendered = true;
            }
        }

        if view_events.contains(&ViewEvent::StatusBarUpdateRequired) {
            self.view_renderer
                .handle_view_event(&ViewEvent::StatusBarUpdateRequired, &self.view_model)?;
        } else if !rendered && view_events.contains(&ViewEvent::CursorUpdateRequired) {
            self.view_renderer.render_cursor(&self.view_model)?;
        }
        Ok(())
    }

    /// Get reference to view model (for testing)
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Pasted text arrives with `\r` or `\r\n` line endings from most terminals
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::io::{MockEventStream, MockRenderStream, RenderCommand};
    use crate::repl::models::{RequestState, UserFacingError, EXAMPLES};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn create_controller() -> AppController<MockEventStream, MockRenderStream> {
        // Nothing listens here; tests below never wait for a completion
        let config = Arc::new(AnalyzerConfig::new("http://127.0.0.1:9/v1/messages", None));
        AppController::with_io_streams(config, MockEventStream::empty(), MockRenderStream::new())
            .unwrap()
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn type_text(controller: &mut AppController<MockEventStream, MockRenderStream>, text: &str) {
        for ch in text.chars() {
            controller
                .process_event(key(KeyCode::Char(ch), KeyModifiers::NONE))
                .unwrap();
        }
    }

    #[test]
    fn app_controller_should_sync_terminal_size() {
        let controller = create_controller();
        assert_eq!(controller.view_model().terminal_size(), (80, 24));
        assert!(!controller.should_quit());
    }

    #[test]
    fn typing_should_edit_ingredients() {
        let mut controller = create_controller();

        type_text(&mut controller, "Salt");
        controller
            .process_event(key(KeyCode::Backspace, KeyModifiers::NONE))
            .unwrap();

        assert_eq!(controller.view_model().ingredient_text(), "Sal");
    }

    #[test]
    fn paste_should_normalize_line_endings() {
        let mut controller = create_controller();

        controller
            .process_event(Event::Paste("Sugar,\r\nSalt\rWater".to_string()))
            .unwrap();

        assert_eq!(
            controller.view_model().ingredient_text(),
            "Sugar,\nSalt\nWater"
        );
    }

    #[test]
    fn enter_on_blank_input_should_fail_locally() {
        let mut controller = create_controller();

        controller
            .process_event(key(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();

        assert_eq!(
            controller.view_model().request_state(),
            &RequestState::Failure(UserFacingError::EmptyInput)
        );
    }

    #[test]
    fn function_key_should_load_example() {
        let mut controller = create_controller();

        controller
            .process_event(key(KeyCode::F(3), KeyModifiers::NONE))
            .unwrap();

        assert_eq!(
            controller.view_model().ingredient_text(),
            EXAMPLES[2].ingredients
        );
    }

    #[test]
    fn ctrl_c_should_quit() {
        let mut controller = create_controller();

        controller
            .process_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();

        assert!(controller.should_quit());
    }

    #[test]
    fn resize_should_trigger_full_redraw() {
        let stream = MockRenderStream::new();
        let handle = stream.handle();
        let config = Arc::new(AnalyzerConfig::new("http://127.0.0.1:9/v1/messages", None));
        let mut controller =
            AppController::with_io_streams(config, MockEventStream::empty(), stream).unwrap();

        controller.process_event(Event::Resize(120, 40)).unwrap();

        assert_eq!(controller.view_model().terminal_size(), (120, 40));
        assert!(handle.has_command(&RenderCommand::ClearScreen));
    }

    #[tokio::test]
    async fn run_should_restore_terminal_on_quit() {
        let stream = MockRenderStream::new();
        let handle = stream.handle();
        let events = MockEventStream::new(vec![
            key(KeyCode::Char('a'), KeyModifiers::NONE),
            key(KeyCode::Char('q'), KeyModifiers::CONTROL),
        ]);
        let config = Arc::new(AnalyzerConfig::new("http://127.0.0.1:9/v1/messages", None));
        let mut controller = AppController::with_io_streams(config, events, stream).unwrap();

        controller.run().await.unwrap();

        assert_eq!(controller.view_model().ingredient_text(), "a");
        let commands = handle.commands();
        assert_eq!(commands.first(), Some(&RenderCommand::EnterForm));
        assert!(commands.contains(&RenderCommand::LeaveForm));
    }

    /// Input source that fails on the first read
    struct ClosedInput;

    impl EventStream for ClosedInput {
        fn next_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Err(anyhow::anyhow!("terminal input closed"))
        }
    }

    #[tokio::test]
    async fn run_should_report_loop_error_when_restore_also_fails() {
        let stream = MockRenderStream::new().with_failing_leave();
        let handle = stream.handle();
        let config = Arc::new(AnalyzerConfig::new("http://127.0.0.1:9/v1/messages", None));
        let mut controller = AppController::with_io_streams(config, ClosedInput, stream).unwrap();

        let error = controller.run().await.unwrap_err();

        assert_eq!(error.to_string(), "terminal input closed");
        assert!(handle.has_command(&RenderCommand::LeaveForm));
    }

    #[tokio::test]
    async fn run_should_report_restore_error_after_clean_quit() {
        let stream = MockRenderStream::new().with_failing_leave();
        let events = MockEventStream::new(vec![key(KeyCode::Char('q'), KeyModifiers::CONTROL)]);
        let config = Arc::new(AnalyzerConfig::new("http://127.0.0.1:9/v1/messages", None));
        let mut controller = AppController::with_io_streams(config, events, stream).unwrap();

        let error = controller.run().await.unwrap_err();

        assert!(controller.should_quit());
        assert_eq!(error.to_string(), "terminal restore failed");
    }
}
