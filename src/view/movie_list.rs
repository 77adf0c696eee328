//! Result list widget.
//!
//! One header row per movie (`▾ Title`), plus detail rows under the
//! expanded one. Rows follow [`crate::view_state::ListLayout`] exactly, so
//! hit-testing and scrolling agree with what is drawn.

use super::constants::DETAIL_INDENT;
use super::styles::ListStyles;
use crate::model::{ImdbId, MovieSummary};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Chevron of a collapsed entry.
pub const CHEVRON_COLLAPSED: &str = "▾";

/// Chevron of the expanded entry.
pub const CHEVRON_EXPANDED: &str = "▴";

const ELLIPSIS: char = '…';

/// Scrolled view of the accumulated results.
pub struct MovieList<'a> {
    movies: &'a [MovieSummary],
    expanded: Option<&'a ImdbId>,
    selected: Option<usize>,
    offset: usize,
    styles: &'a ListStyles,
}

impl<'a> MovieList<'a> {
    /// Create new MovieList widget.
    pub fn new(movies: &'a [MovieSummary], styles: &'a ListStyles) -> Self {
        Self {
            movies,
            expanded: None,
            selected: None,
            offset: 0,
            styles,
        }
    }

    /// Mark the expanded entry.
    pub fn expanded(mut self, expanded: Option<&'a ImdbId>) -> Self {
        self.expanded = expanded;
        self
    }

    /// Highlight entry `selected`.
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// First visible row.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    fn entry_lines(&self, index: usize, movie: &MovieSummary, width: usize) -> Vec<Line<'static>> {
        let is_expanded = self.expanded == Some(movie.imdb_id());
        let chevron = if is_expanded {
            CHEVRON_EXPANDED
        } else {
            CHEVRON_COLLAPSED
        };

        // Chevron and its trailing space take two columns
        let title = truncate_to_width(movie.title(), width.saturating_sub(2));
        let mut header = Line::from(vec![
            Span::styled(chevron, self.styles.chevron),
            Span::raw(" "),
            Span::raw(title),
        ]);
        if self.selected == Some(index) {
            header = header.style(self.styles.selected);
        }

        let mut lines = vec![header];
        if is_expanded {
            lines.push(self.detail_line("Year", movie.year(), width));
            lines.push(self.detail_line("Type", movie.kind(), width));
            if let Some(url) = movie.poster().url() {
                lines.push(self.detail_line("Poster", url, width));
            }
        }
        lines
    }

    fn detail_line(&self, label: &str, value: &str, width: usize) -> Line<'static> {
        let prefix = format!("{}{}: ", DETAIL_INDENT, label);
        let value = truncate_to_width(value, width.saturating_sub(prefix.width()));
        Line::from(vec![
            Span::raw(DETAIL_INDENT),
            Span::styled(format!("{}:", label), self.styles.detail_label),
            Span::raw(" "),
            Span::raw(value),
        ])
    }
}

impl Widget for MovieList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = usize::from(area.width);
        let height = usize::from(area.height);

        let lines: Vec<Line> = self
            .movies
            .iter()
            .enumerate()
            .flat_map(|(index, movie)| self.entry_lines(index, movie, width))
            .skip(self.offset)
            .take(height)
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut with
/// an ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}
