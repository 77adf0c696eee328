//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user
//! interactions. Time is synthetic: the harness owns the clock, so debounce
//! behavior is exact and tests never sleep.

use crate::config::{LoadingPlacement, ResolvedConfig};
use crate::model::{FetchError, ImdbId, MovieSummary, Page, Poster, SearchPage};
use crate::omdb::MovieSearch;
use crate::state::AppState;
use crate::view::{ColorConfig, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// One line per screen row with trailing spaces trimmed, so row numbers in
/// assertions match the screen.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Page of `count` movies titled `"{prefix} {n}"` with ids `"{prefix}{n}"`,
/// numbered from `start`.
pub(crate) fn movie_page(prefix: &str, start: usize, count: usize, total: u32) -> SearchPage {
    SearchPage {
        movies: (start..start + count)
            .map(|n| {
                MovieSummary::new(
                    ImdbId::new(format!("{}{}", prefix, n)).unwrap(),
                    format!("{} {}", prefix, n),
                    "1989",
                    "movie",
                    Poster::Url(format!("https://img.example/{}{}.jpg", prefix, n)),
                )
            })
            .collect(),
        total_results: Some(total),
    }
}

// ===== ScriptedSearch =====

/// Fake [`MovieSearch`] answering from a table and recording every call.
///
/// Unknown `(query, page)` pairs answer like the real API does for a miss.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSearch {
    responses: HashMap<(String, u32), Result<SearchPage, FetchError>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedSearch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer `query` page `page` with `result`.
    pub(crate) fn with_page(mut self, query: &str, page: u32, result: SearchPage) -> Self {
        self.responses.insert((query.to_string(), page), Ok(result));
        self
    }

    /// Fail `query` page `page` with `error`.
    pub(crate) fn with_error(mut self, query: &str, page: u32, error: FetchError) -> Self {
        self.responses.insert((query.to_string(), page), Err(error));
        self
    }

    /// Every `(query, page)` searched so far, in call order.
    pub(crate) fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl MovieSearch for ScriptedSearch {
    fn search(&self, query: &str, page: Page) -> Result<SearchPage, FetchError> {
        let key = (query.to_string(), page.get());
        self.calls.lock().unwrap().push(key.clone());
        self.responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::upstream(Some("Movie not found!".into()))))
    }
}

// ===== AcceptanceTestHarness =====

const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    searcher: Arc<ScriptedSearch>,
    now: Instant,
}

impl AcceptanceTestHarness {
    /// 60x20 screen, default config, overlay first-page loading.
    pub(crate) fn new(searcher: ScriptedSearch) -> Self {
        Self::with_config(searcher, ResolvedConfig::default(), 60, 20)
    }

    /// Screen of `width` x `height` with `placement` for first-page loading.
    pub(crate) fn with_placement(
        searcher: ScriptedSearch,
        placement: LoadingPlacement,
        width: u16,
        height: u16,
    ) -> Self {
        let config = ResolvedConfig {
            first_page_loading: placement,
            ..ResolvedConfig::default()
        };
        Self::with_config(searcher, config, width, height)
    }

    pub(crate) fn with_config(
        searcher: ScriptedSearch,
        config: ResolvedConfig,
        width: u16,
        height: u16,
    ) -> Self {
        let searcher = Arc::new(searcher);
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut app = TuiApp::with_terminal(
            terminal,
            &config,
            searcher.clone(),
            ColorConfig::disabled(),
        );
        app.draw().unwrap();

        Self {
            app,
            searcher,
            now: Instant::now(),
        }
    }

    /// Start with `query` (fetched immediately) and render.
    pub(crate) fn start(&mut self, query: &str) {
        self.app.start(query);
        self.render();
    }

    /// Type `text` one character at a time without advancing the clock.
    pub(crate) fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    /// Press `code` without modifiers. Returns true if the app quit.
    pub(crate) fn press(&mut self, code: KeyCode) -> bool {
        self.press_with_mods(code, KeyModifiers::NONE)
    }

    /// Press `code` with `mods`. Returns true if the app quit.
    pub(crate) fn press_with_mods(&mut self, code: KeyCode, mods: KeyModifiers) -> bool {
        let quit = self.app.handle_key(KeyEvent::new(code, mods), self.now);
        self.render();
        quit
    }

    /// Left-click screen cell (`column`, `row`).
    pub(crate) fn click(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// Scroll the wheel by one notch down (positive) or up (negative) per unit.
    pub(crate) fn wheel(&mut self, notches: i32) {
        let kind = if notches < 0 {
            MouseEventKind::ScrollUp
        } else {
            MouseEventKind::ScrollDown
        };
        for _ in 0..notches.unsigned_abs() {
            self.mouse(kind, 0, 5);
        }
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        self.app.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.render();
    }

    /// Move the clock forward and run one loop iteration.
    pub(crate) fn advance(&mut self, by: Duration) {
        self.now += by;
        self.app.pump(self.now);
        self.render();
    }

    /// Wait until every dispatched fetch has completed and been applied.
    pub(crate) fn settle(&mut self) {
        while self.app.source().in_flight() > 0 {
            assert!(
                self.app.wait_for_completion(SETTLE_TIMEOUT),
                "fetch did not complete within {:?}",
                SETTLE_TIMEOUT
            );
        }
        self.render();
    }

    /// Render a frame.
    pub(crate) fn render(&mut self) {
        self.app.draw().unwrap();
    }

    /// Current screen contents.
    pub(crate) fn screen(&self) -> String {
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Current state.
    pub(crate) fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Calls made to the fake search so far.
    pub(crate) fn calls(&self) -> Vec<(String, u32)> {
        self.searcher.calls()
    }
}
