//! Loading and error indicators.

use super::constants::{LOADING_POPUP_HEIGHT, LOADING_POPUP_WIDTH};
use super::styles::ListStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Text of the first-page loading indicator.
pub const LOADING_TEXT: &str = "Loading...";

/// Text of the next-page loading indicator.
pub const FETCHING_MORE_TEXT: &str = "Fetching more movies...";

/// Render a bordered "Loading..." popup centered over `area`.
pub fn render_loading_overlay(frame: &mut Frame, area: Rect, styles: &ListStyles) {
    let popup_area = centered_rect(LOADING_POPUP_WIDTH, LOADING_POPUP_HEIGHT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(Line::from(LOADING_TEXT))
        .style(styles.loading)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(popup, popup_area);
}

/// Render a one-line loading indicator.
pub fn render_loading_row(frame: &mut Frame, area: Rect, text: &str, styles: &ListStyles) {
    let row = Paragraph::new(Line::from(text.to_string())).style(styles.loading);
    frame.render_widget(row, area);
}

/// Render the error line.
pub fn render_error_line(frame: &mut Frame, area: Rect, message: &str, styles: &ListStyles) {
    let line = Paragraph::new(Line::from(message.to_string())).style(styles.error);
    frame.render_widget(line, area);
}

/// Rect of `width` x `height` centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
