//! Search box widget.

use super::styles::ListStyles;
use crate::state::SearchInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Bordered single-line search field with a block cursor.
pub struct SearchBox<'a> {
    input: &'a SearchInput,
    styles: &'a ListStyles,
}

impl<'a> SearchBox<'a> {
    /// Create new SearchBox widget.
    pub fn new(input: &'a SearchInput, styles: &'a ListStyles) -> Self {
        Self { input, styles }
    }
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.input.text();
        let cursor = self.input.cursor();

        // Split text into before/after cursor for rendering cursor
        let before: String = text.chars().take(cursor).collect();
        let mut after = text.chars().skip(cursor);
        let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after_text: String = after.collect();

        // Scroll sideways so the cursor stays inside the borders
        let inner_width = usize::from(area.width.saturating_sub(2));
        let cursor_width = cursor_char.width().max(1);
        let before = visible_tail(&before, inner_width.saturating_sub(cursor_width));

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_char, self.styles.cursor),
            Span::raw(after_text),
        ]);

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Search movies ")
                    .border_style(self.styles.input_border),
            )
            .render(area, buf);
    }
}

/// Longest suffix of `text` at most `max_width` columns wide.
fn visible_tail(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }

    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = index;
    }
    &text[start..]
}
