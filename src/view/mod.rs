//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod indicators;
mod layout;
mod movie_list;
mod search_input;
mod styles;

pub use indicators::{FETCHING_MORE_TEXT, LOADING_TEXT};
pub use layout::{calculate_areas, render_layout, status_text, LoadingIndicator, ScreenAreas};
pub use movie_list::{truncate_to_width, MovieList, CHEVRON_COLLAPSED, CHEVRON_EXPANDED};
pub use search_input::SearchBox;
pub use styles::{ColorConfig, ListStyles};

use crate::config::{KeyBindings, LoadingPlacement, ResolvedConfig};
use crate::model::{FetchRequest, KeyAction};
use crate::omdb::MovieSearch;
use crate::source::FetchSource;
use crate::state::{search_input_handler, AppState, CompletionOutcome, SearchInput};
use crate::view_state::hit_test;
use constants::IDLE_POLL_INTERVAL;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    source: FetchSource,
    key_bindings: KeyBindings,
    first_page_loading: LoadingPlacement,
    styles: ListStyles,
    /// Last rendered list area (for mouse click detection)
    last_list_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(
        config: &ResolvedConfig,
        searcher: Arc<dyn MovieSearch>,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, config, searcher, colors))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (Esc or Ctrl+C). Waits for terminal events
    /// no longer than the next debounce deadline, and never longer than
    /// [`IDLE_POLL_INTERVAL`] so finished fetches are picked up promptly.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());
            let mut dirty = false;

            if event::poll(timeout)? {
                match event::read()? {
                    // Release/repeat kinds are reported on some platforms; act on presses only
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(()); // User quit
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.pump(Instant::now()) || dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal.
    ///
    /// Nothing is fetched until [`Self::start`] is called.
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: &ResolvedConfig,
        searcher: Arc<dyn MovieSearch>,
        colors: ColorConfig,
    ) -> Self {
        Self {
            terminal,
            app_state: AppState::new(config.debounce, usize::from(config.scroll_threshold)),
            source: FetchSource::new(searcher),
            key_bindings: KeyBindings::default(),
            first_page_loading: config.first_page_loading,
            styles: ListStyles::with_color_config(colors),
            last_list_area: None,
        }
    }

    /// Show `initial_query` and fetch its first page immediately.
    pub fn start(&mut self, initial_query: &str) {
        let request = self.app_state.start(initial_query);
        self.dispatch(request);
    }

    /// Current state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Terminal the app draws into.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Background request executor.
    pub fn source(&self) -> &FetchSource {
        &self.source
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        match self.app_state.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(now)
                .min(IDLE_POLL_INTERVAL),
            None => IDLE_POLL_INTERVAL,
        }
    }

    fn dispatch(&mut self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            self.source.dispatch(request);
        }
    }

    /// Apply finished fetches and fire the debounce if due.
    ///
    /// Returns true if anything changed.
    pub fn pump(&mut self, now: Instant) -> bool {
        let mut changed = false;

        for completion in self.source.poll() {
            changed |= self.app_state.apply_completion(completion) == CompletionOutcome::Applied;
        }

        if let Some(request) = self.app_state.tick(now) {
            self.source.dispatch(request);
            changed = true;
        }

        changed
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Text editing keys go to the search box before key binding dispatch
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        // Windows reports AltGr characters (`@`, `{`, `\`) as Ctrl+Alt
        let altgr = key
            .modifiers
            .contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let edit: Option<fn(SearchInput) -> SearchInput> = match key.code {
            KeyCode::Char(ch) if plain || altgr => {
                self.app_state.edit_input(
                    |input| search_input_handler::handle_char_input(input, ch),
                    now,
                );
                return false;
            }
            KeyCode::Backspace => Some(search_input_handler::handle_backspace),
            KeyCode::Delete => Some(search_input_handler::handle_delete),
            KeyCode::Left => Some(search_input_handler::handle_cursor_left),
            KeyCode::Right => Some(search_input_handler::handle_cursor_right),
            KeyCode::Home if plain => Some(search_input_handler::handle_cursor_home),
            KeyCode::End if plain => Some(search_input_handler::handle_cursor_end),
            _ => None,
        };
        if let Some(edit) = edit {
            self.app_state.edit_input(edit, now);
            return false;
        }

        // Look up action in key bindings
        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false, // Unknown key, ignore
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::ClearQuery => {
                self.app_state.edit_input(search_input_handler::clear_input, now);
            }
            KeyAction::ToggleExpand => self.app_state.toggle_selected(),
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => {
                let request = self.app_state.handle_scroll_action(action);
                self.dispatch(request);
            }
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// Left click on a title row toggles that entry; the wheel scrolls.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                let request = self.app_state.handle_wheel(-1);
                self.dispatch(request);
            }
            MouseEventKind::ScrollDown => {
                let request = self.app_state.handle_wheel(1);
                self.dispatch(request);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(area) = self.last_list_area else {
                    return;
                };
                let hit = hit_test(
                    self.app_state.layout(),
                    area,
                    self.app_state.viewport().offset,
                    mouse.column,
                    mouse.row,
                );
                if let Some(index) = hit.header_index() {
                    self.app_state.click_entry(index);
                }
            }
            _ => {}
        }
    }

    /// Render the current frame
    ///
    /// Areas are computed first so the list viewport height and the mouse
    /// hit area match what is drawn.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let areas = calculate_areas(frame_area, &self.app_state, self.first_page_loading);

        self.app_state.set_viewport_height(usize::from(areas.list.height));
        self.last_list_area = Some(areas.list);

        let placement = self.first_page_loading;
        self.terminal.draw(|frame| {
            render_layout(frame, &areas, &self.app_state, placement, &self.styles);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Block up to `timeout` for one completion and apply it (test-only).
    ///
    /// Returns false if nothing arrived in time.
    pub(crate) fn wait_for_completion(&mut self, timeout: Duration) -> bool {
        match self.source.wait(timeout) {
            Some(completion) => {
                self.app_state.apply_completion(completion);
                true
            }
            None => false,
        }
    }
}

/// Initialize and run the TUI application with resolved configuration
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(
    config: &ResolvedConfig,
    searcher: Arc<dyn MovieSearch>,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(config, searcher, colors)?;
    app.start(&config.initial_query);

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
