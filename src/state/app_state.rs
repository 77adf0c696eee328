//! Application state and transitions.
//!
//! AppState is the root state type of the search screen. Transitions are
//! pure: time is passed in, and requests are returned to the caller instead
//! of being sent, so every lifecycle step is testable without a terminal or
//! a network.

use crate::model::{
    FetchCompletion, FetchRequest, FetchTag, ImdbId, KeyAction, MovieSummary, Page,
};
use crate::state::debounce::Debouncer;
use crate::state::expand_handler::toggle_expanded;
use crate::state::results::ResultList;
use crate::state::scroll_handler::{handle_scroll_action, handle_wheel, ListViewport};
use crate::state::scroll_trigger::ScrollTrigger;
use crate::state::search::{SearchInput, SearchQuery};
use crate::view_state::ListLayout;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

// ===== Phase =====

/// Where the current query is in its lifecycle.
///
/// ```text
/// Idle -> Debouncing -> Fetching(1) -> IdleWithResults -> Fetching(n+1) -> ...
///                            \                                  |
///                             +-------------> Error <-----------+
/// ```
///
/// A query edit from any phase returns to `Debouncing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed, nothing loaded.
    Idle,
    /// Input changed; waiting for it to settle.
    Debouncing,
    /// A request for `page` is in flight.
    Fetching {
        /// Page being fetched.
        page: Page,
    },
    /// Results are shown and nothing is pending.
    IdleWithResults,
    /// The last request failed.
    Error,
}

/// What [`AppState::apply_completion`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The completion matched the awaited request and was applied.
    Applied,
    /// The completion belonged to an older query or page and was dropped.
    Stale,
}

// ===== AppState =====

/// State of the movie search screen. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Text field contents. Updated on every keystroke.
    input: SearchInput,

    /// Trailing-edge timer feeding the effective query.
    debouncer: Debouncer<String>,

    /// Last settled, non-empty query. Drives all fetching.
    effective_query: Option<SearchQuery>,

    /// Highest page requested for the effective query.
    page: Page,

    /// Bumped on every query edit; tags requests so stale answers are dropped.
    generation: u64,

    /// Accumulated results of the current query.
    results: ResultList,

    /// The one expanded result, if any.
    expanded: Option<ImdbId>,

    /// Request currently awaited. Loading is derived from this.
    in_flight: Option<FetchTag>,

    /// Error line text; cleared when the next fetch starts.
    error: Option<String>,

    /// Scroll position and selection of the list.
    viewport: ListViewport,

    /// Load-more trigger; armed whenever a page arrives.
    trigger: ScrollTrigger,

    /// Row layout of `results`, rebuilt when the list or expansion changes.
    layout: ListLayout,
}

impl AppState {
    /// Idle state with the given debounce delay and near-bottom threshold.
    pub fn new(debounce: Duration, scroll_threshold: usize) -> Self {
        Self {
            input: SearchInput::default(),
            debouncer: Debouncer::new(debounce),
            effective_query: None,
            page: Page::FIRST,
            generation: 0,
            results: ResultList::new(),
            expanded: None,
            in_flight: None,
            error: None,
            viewport: ListViewport::default(),
            trigger: ScrollTrigger::new(scroll_threshold),
            layout: ListLayout::default(),
        }
    }

    /// Seed the input with `initial` and fetch its first page right away.
    ///
    /// The startup query skips the debounce delay.
    pub fn start(&mut self, initial: &str) -> Option<FetchRequest> {
        self.input = SearchInput::with_text(initial);
        self.debouncer.cancel();
        self.effective_query = SearchQuery::new(initial);
        self.begin_fetch(Page::FIRST)
    }

    // ===== Query editing =====

    /// Apply an edit to the search input.
    ///
    /// If the text changed, the query lifecycle restarts: page 1, empty list,
    /// nothing expanded, and the debounce timer restarted from `now`.
    /// Cursor-only edits change nothing else.
    pub fn edit_input(&mut self, edit: impl FnOnce(SearchInput) -> SearchInput, now: Instant) {
        let before = std::mem::take(&mut self.input);
        let previous_text = before.text().to_string();
        self.input = edit(before);

        if self.input.text() != previous_text {
            self.restart_query(now);
        }
    }

    fn restart_query(&mut self, now: Instant) {
        self.generation += 1;
        self.page = Page::FIRST;
        self.results.clear();
        self.expanded = None;
        self.in_flight = None;
        self.trigger.disarm();
        self.viewport = ListViewport::new(self.viewport.height);
        self.debouncer.schedule(self.input.text().to_string(), now);
        self.relayout();
        debug!(
            generation = self.generation,
            delay_ms = self.debouncer.delay().as_millis() as u64,
            "query edited, debounce restarted"
        );
    }

    /// Advance time. Returns the first-page request once the input settles.
    pub fn tick(&mut self, now: Instant) -> Option<FetchRequest> {
        let settled = self.debouncer.poll(now)?;
        self.effective_query = SearchQuery::new(settled);
        if self.effective_query.is_none() {
            debug!("settled query is blank, not fetching");
        }
        self.begin_fetch(Page::FIRST)
    }

    /// When the pending debounce fires, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    // ===== Fetching =====

    fn begin_fetch(&mut self, page: Page) -> Option<FetchRequest> {
        let query = self.effective_query.as_ref()?.as_str().to_string();
        let tag = FetchTag {
            generation: self.generation,
            page,
        };

        self.page = page;
        self.in_flight = Some(tag);
        self.error = None;
        info!(query = %query, page = %page, generation = tag.generation, "fetch started");

        Some(FetchRequest { tag, query })
    }

    /// Apply a finished request.
    ///
    /// Only the awaited request is applied; anything else is stale.
    pub fn apply_completion(&mut self, completion: FetchCompletion) -> CompletionOutcome {
        if self.in_flight != Some(completion.tag) {
            debug!(
                generation = completion.tag.generation,
                page = %completion.tag.page,
                current_generation = self.generation,
                "dropping stale completion"
            );
            return CompletionOutcome::Stale;
        }
        self.in_flight = None;

        match completion.result {
            Ok(page) => {
                let added = self.results.append(page);
                self.trigger.arm();
                self.relayout();
                info!(
                    page = %completion.tag.page,
                    added,
                    total = self.results.len(),
                    "page loaded"
                );
            }
            Err(err) => {
                warn!(page = %completion.tag.page, error = %err, "fetch failed");
                self.error = Some(err.user_message().to_string());
                self.trigger.disarm();
            }
        }
        CompletionOutcome::Applied
    }

    // ===== Scrolling =====

    /// Handle a keyboard scroll action. Returns the next-page request if the
    /// scroll reached the bottom of the list.
    pub fn handle_scroll_action(&mut self, action: KeyAction) -> Option<FetchRequest> {
        self.viewport = handle_scroll_action(self.viewport, action, &self.layout);
        self.on_scroll()
    }

    /// Handle `delta` mouse wheel notches (negative is up).
    pub fn handle_wheel(&mut self, delta: i32) -> Option<FetchRequest> {
        self.viewport = handle_wheel(self.viewport, delta, &self.layout);
        self.on_scroll()
    }

    /// Evaluate the load-more trigger against the current viewport.
    pub fn on_scroll(&mut self) -> Option<FetchRequest> {
        if self.debouncer.is_pending() || self.effective_query.is_none() {
            return None;
        }
        if self.trigger.on_scroll(self.viewport.metrics(&self.layout)) {
            let next = self.page.next();
            debug!(
                page = %next,
                threshold = self.trigger.threshold(),
                "scrolled near bottom"
            );
            self.begin_fetch(next)
        } else {
            None
        }
    }

    /// Resize the list viewport.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport.height = height;
        self.viewport = self.viewport.clamp(&self.layout);
    }

    // ===== Expand/collapse =====

    /// Toggle the selected result.
    pub fn toggle_selected(&mut self) {
        if let Some(index) = self.viewport.selected {
            self.toggle_entry(index);
        }
    }

    /// Select and toggle result `index` (header click).
    pub fn click_entry(&mut self, index: usize) {
        if index < self.results.len() {
            self.viewport.selected = Some(index);
            self.toggle_entry(index);
        }
    }

    fn toggle_entry(&mut self, index: usize) {
        let Some(movie) = self.results.get(index) else {
            return;
        };
        let id = movie.imdb_id().clone();
        self.expanded = toggle_expanded(self.expanded.take(), &id);
        self.relayout();
        self.viewport = self.viewport.ensure_visible(&self.layout);
    }

    fn relayout(&mut self) {
        self.layout = ListLayout::compute(self.results.movies(), self.expanded.as_ref());
        self.viewport = self.viewport.clamp(&self.layout);
    }

    // ===== Accessors =====

    /// Lifecycle phase of the current query.
    pub fn phase(&self) -> Phase {
        if let Some(tag) = self.in_flight {
            Phase::Fetching { page: tag.page }
        } else if self.debouncer.is_pending() {
            Phase::Debouncing
        } else if self.error.is_some() {
            Phase::Error
        } else if self.results.is_empty() {
            Phase::Idle
        } else {
            Phase::IdleWithResults
        }
    }

    /// Search field.
    pub fn input(&self) -> &SearchInput {
        &self.input
    }

    /// Settled query, if any.
    pub fn effective_query(&self) -> Option<&SearchQuery> {
        self.effective_query.as_ref()
    }

    /// Highest requested page.
    pub fn page(&self) -> Page {
        self.page
    }

    /// Current query generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Loaded results.
    pub fn results(&self) -> &ResultList {
        &self.results
    }

    /// Loaded results as a slice.
    pub fn movies(&self) -> &[MovieSummary] {
        self.results.movies()
    }

    /// Expanded result id.
    pub fn expanded(&self) -> Option<&ImdbId> {
        self.expanded.as_ref()
    }

    /// Whether `id` is the expanded result.
    pub fn is_expanded(&self, id: &ImdbId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Error line text.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a request is awaited.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Page of the awaited request.
    pub fn loading_page(&self) -> Option<Page> {
        self.in_flight.map(|tag| tag.page)
    }

    /// Whether the debounce timer is running.
    pub fn is_debouncing(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// List viewport.
    pub fn viewport(&self) -> &ListViewport {
        &self.viewport
    }

    /// Row layout of the list.
    pub fn layout(&self) -> &ListLayout {
        &self.layout
    }

    /// Load-more trigger.
    pub fn trigger(&self) -> &ScrollTrigger {
        &self.trigger
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
