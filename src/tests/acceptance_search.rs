//! Acceptance tests: typing, debouncing and first-page results.

use crate::config::LoadingPlacement;
use crate::model::FetchError;
use crate::state::Phase;
use crate::test_harness::{movie_page, AcceptanceTestHarness, ScriptedSearch};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

const DEBOUNCE: Duration = Duration::from_millis(500);

#[test]
fn startup_query_shows_overlay_then_results() {
    // GIVEN: the startup query "Batman" with ten results upstream
    let searcher = ScriptedSearch::new().with_page("Batman", 1, movie_page("bat", 0, 10, 468));
    let mut harness = AcceptanceTestHarness::new(searcher);

    // WHEN: the app starts
    harness.start("Batman");

    // THEN: the first page is requested immediately and loading is shown
    assert!(harness.screen().contains("Loading..."));
    assert_eq!(
        harness.state().phase(),
        Phase::Fetching {
            page: crate::model::Page::FIRST
        }
    );

    harness.settle();

    let screen = harness.screen();
    assert!(!screen.contains("Loading..."));
    assert!(screen.contains("▾ bat 0"));
    assert!(screen.contains("▾ bat 9"));
    assert!(screen.contains("10 of 468 results"));
    assert_eq!(harness.state().results().len(), 10);
    assert_eq!(harness.calls(), [("Batman".to_string(), 1)]);
}

#[test]
fn unknown_title_shows_upstream_error() {
    let mut harness = AcceptanceTestHarness::new(ScriptedSearch::new());

    harness.start("zzzzNotAMovie");
    harness.settle();

    let screen = harness.screen();
    // Error line sits directly under the search box
    assert_eq!(screen.lines().nth(3), Some("Movie not found!"));
    assert!(harness.state().results().is_empty());
    assert_eq!(harness.state().phase(), Phase::Error);
}

#[test]
fn settled_input_fetches_exactly_once() {
    let searcher = ScriptedSearch::new().with_page("Alien", 1, movie_page("al", 0, 3, 3));
    let mut harness = AcceptanceTestHarness::new(searcher);

    harness.type_text("Alien");
    harness.advance(DEBOUNCE - Duration::from_millis(1));
    assert!(harness.calls().is_empty(), "still debouncing");

    harness.advance(Duration::from_millis(1));
    harness.settle();
    harness.advance(DEBOUNCE * 4);

    assert_eq!(harness.calls(), [("Alien".to_string(), 1)]);
    assert!(harness.screen().contains("▾ al 2"));
}

#[test]
fn keystrokes_within_delay_fetch_final_value_only() {
    let searcher = ScriptedSearch::new().with_page("Heat", 1, movie_page("heat", 0, 1, 1));
    let mut harness = AcceptanceTestHarness::new(searcher);

    harness.type_text("He");
    harness.advance(Duration::from_millis(200));
    harness.type_text("at");
    harness.advance(Duration::from_millis(499));
    assert!(harness.calls().is_empty());

    harness.advance(Duration::from_millis(1));
    harness.settle();

    assert_eq!(harness.calls(), [("Heat".to_string(), 1)]);
    assert_eq!(harness.state().input().text(), "Heat");
}

#[test]
fn answer_for_previous_query_is_discarded() {
    let searcher = ScriptedSearch::new()
        .with_page("Batman", 1, movie_page("old", 0, 10, 10))
        .with_page("Batmans", 1, movie_page("new", 0, 2, 2));
    let mut harness = AcceptanceTestHarness::new(searcher);

    // First request is still outstanding when the query changes
    harness.start("Batman");
    harness.type_text("s");
    harness.advance(DEBOUNCE);
    harness.settle();

    let titles: Vec<_> = harness
        .state()
        .movies()
        .iter()
        .map(|m| m.title().to_string())
        .collect();
    assert_eq!(titles, ["new 0", "new 1"]);
    assert_eq!(harness.calls().len(), 2);
}

#[test]
fn editing_query_clears_results_synchronously() {
    let searcher = ScriptedSearch::new().with_page("Batman", 1, movie_page("bat", 0, 5, 5));
    let mut harness = AcceptanceTestHarness::new(searcher);
    harness.start("Batman");
    harness.settle();

    harness.press(KeyCode::Backspace);

    assert!(harness.state().results().is_empty());
    assert_eq!(harness.state().phase(), Phase::Debouncing);
    assert!(!harness.screen().contains("bat 0"));
}

#[test]
fn clearing_query_issues_no_request() {
    let searcher = ScriptedSearch::new().with_page("Batman", 1, movie_page("bat", 0, 5, 5));
    let mut harness = AcceptanceTestHarness::new(searcher);
    harness.start("Batman");
    harness.settle();

    harness.press_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL);
    harness.advance(DEBOUNCE * 2);

    assert_eq!(harness.calls().len(), 1);
    assert_eq!(harness.state().input().text(), "");
    assert_eq!(harness.state().phase(), Phase::Idle);
}

#[test]
fn transport_failure_shows_generic_message() {
    let searcher = ScriptedSearch::new().with_error(
        "Batman",
        1,
        FetchError::Transport("connection reset".into()),
    );
    let mut harness = AcceptanceTestHarness::new(searcher);

    harness.start("Batman");
    harness.settle();

    assert!(harness
        .screen()
        .contains("Error fetching data. Please try again later."));
    assert!(!harness.screen().contains("connection reset"));
}

#[test]
fn inline_placement_shows_loading_row_below_list() {
    let searcher = ScriptedSearch::new().with_page("Batman", 1, movie_page("bat", 0, 1, 1));
    let mut harness =
        AcceptanceTestHarness::with_placement(searcher, LoadingPlacement::Inline, 60, 20);

    harness.start("Batman");

    // Rows: search box 0-2, list 3-17, loading row 18, status bar 19
    assert_eq!(harness.screen().lines().nth(18), Some("Loading..."));
    assert_eq!(harness.screen().matches("Loading...").count(), 1, "no overlay");

    harness.settle();
    assert!(!harness.screen().contains("Loading..."));
}
