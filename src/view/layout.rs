//! Screen layout rendering.
//!
//! Top to bottom: search box, error line (only with an error), result list,
//! inline loading row (only while one is shown), status bar.

use super::constants::{
    ERROR_LINE_HEIGHT, LOADING_ROW_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT,
};
use super::indicators::{
    render_error_line, render_loading_overlay, render_loading_row, FETCHING_MORE_TEXT,
    LOADING_TEXT,
};
use super::movie_list::MovieList;
use super::search_input::SearchBox;
use super::styles::ListStyles;
use crate::config::LoadingPlacement;
use crate::state::{AppState, Phase};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// How the current request's loading state is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingIndicator {
    /// Nothing loading.
    None,
    /// Popup over the list.
    Overlay,
    /// Row below the list with the given text.
    Inline(&'static str),
}

impl LoadingIndicator {
    /// Indicator for `state` with first pages shown per `placement`.
    pub fn for_state(state: &AppState, placement: LoadingPlacement) -> Self {
        match state.loading_page() {
            None => Self::None,
            Some(page) if !page.is_first() => Self::Inline(FETCHING_MORE_TEXT),
            Some(_) => match placement {
                LoadingPlacement::Overlay => Self::Overlay,
                LoadingPlacement::Inline => Self::Inline(LOADING_TEXT),
            },
        }
    }
}

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Search box.
    pub search: Rect,
    /// Error line, when an error is shown.
    pub error: Option<Rect>,
    /// Result list.
    pub list: Rect,
    /// Inline loading row, when shown.
    pub loading_row: Option<Rect>,
    /// Status bar.
    pub status: Rect,
}

/// Split `frame_area` for `state`.
pub fn calculate_areas(
    frame_area: Rect,
    state: &AppState,
    placement: LoadingPlacement,
) -> ScreenAreas {
    let has_error = state.error().is_some();
    let has_loading_row = matches!(
        LoadingIndicator::for_state(state, placement),
        LoadingIndicator::Inline(_)
    );

    let mut constraints = vec![Constraint::Length(SEARCH_INPUT_HEIGHT)];
    if has_error {
        constraints.push(Constraint::Length(ERROR_LINE_HEIGHT));
    }
    constraints.push(Constraint::Min(0));
    if has_loading_row {
        constraints.push(Constraint::Length(LOADING_ROW_HEIGHT));
    }
    constraints.push(Constraint::Length(STATUS_BAR_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame_area);

    let mut next = chunks.iter().copied();
    let search = next.next().unwrap_or_default();
    let error = if has_error { next.next() } else { None };
    let list = next.next().unwrap_or_default();
    let loading_row = if has_loading_row { next.next() } else { None };
    let status = next.next().unwrap_or_default();

    ScreenAreas {
        search,
        error,
        list,
        loading_row,
        status,
    }
}

/// Render the whole screen into precomputed `areas`.
pub fn render_layout(
    frame: &mut Frame,
    areas: &ScreenAreas,
    state: &AppState,
    placement: LoadingPlacement,
    styles: &ListStyles,
) {
    frame.render_widget(SearchBox::new(state.input(), styles), areas.search);

    if let (Some(area), Some(message)) = (areas.error, state.error()) {
        render_error_line(frame, area, message, styles);
    }

    let viewport = state.viewport();
    let list = MovieList::new(state.movies(), styles)
        .expanded(state.expanded())
        .selected(viewport.selected)
        .offset(viewport.offset);
    frame.render_widget(list, areas.list);

    match LoadingIndicator::for_state(state, placement) {
        LoadingIndicator::Overlay => render_loading_overlay(frame, areas.list, styles),
        LoadingIndicator::Inline(text) => {
            if let Some(area) = areas.loading_row {
                render_loading_row(frame, area, text, styles);
            }
        }
        LoadingIndicator::None => {}
    }

    render_status_bar(frame, areas.status, state, styles);
}

/// Status bar text: result count, phase, key hints.
pub fn status_text(state: &AppState) -> String {
    let loaded = state.results().len();
    let count = match state.results().total_results() {
        Some(total) => format!("{} of {} results", loaded, total),
        None => format!("{} results", loaded),
    };
    let phase = match state.phase() {
        Phase::Idle => "idle".to_string(),
        Phase::Debouncing => "typing".to_string(),
        Phase::Fetching { page } => format!("loading page {}", page),
        Phase::IdleWithResults => format!("page {}", state.page()),
        Phase::Error => "error".to_string(),
    };
    format!(" {} | {} | Enter: expand | Ctrl+U: clear | Esc: quit", count, phase)
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &ListStyles) {
    let paragraph = Paragraph::new(Line::from(status_text(state))).style(styles.status);
    frame.render_widget(paragraph, area);
}
