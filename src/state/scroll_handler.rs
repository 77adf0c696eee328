//! Result list viewport and keyboard/wheel scroll handling.
//!
//! Pure functions that move the viewport in response to scroll actions.
//! Keyboard actions move the selection cursor and keep it visible; the
//! mouse wheel moves the viewport directly.

use crate::model::KeyAction;
use crate::state::scroll_trigger::ScrollMetrics;
use crate::view_state::ListLayout;

/// Rows moved per wheel notch.
pub const WHEEL_STEP: usize = 3;

/// Visible window over the result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListViewport {
    /// First visible row.
    pub offset: usize,
    /// Selected entry index.
    pub selected: Option<usize>,
    /// Visible rows.
    pub height: usize,
}

impl ListViewport {
    /// Viewport of `height` rows at the top, nothing selected.
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            selected: None,
            height,
        }
    }

    /// Scroll metrics against `layout`.
    pub fn metrics(&self, layout: &ListLayout) -> ScrollMetrics {
        ScrollMetrics {
            viewport_height: self.height,
            scroll_offset: self.offset,
            content_height: layout.total_height(),
        }
    }

    /// Largest valid offset for `layout`.
    pub fn max_offset(&self, layout: &ListLayout) -> usize {
        layout.total_height().saturating_sub(self.height)
    }

    /// Clamp offset and selection to `layout`.
    pub fn clamp(mut self, layout: &ListLayout) -> Self {
        self.offset = self.offset.min(self.max_offset(layout));
        self.selected = match self.selected {
            _ if layout.is_empty() => None,
            Some(index) => Some(index.min(layout.len() - 1)),
            None => None,
        };
        self
    }

    /// Scroll so the whole selected entry is visible (its header at least,
    /// when taller than the viewport).
    pub fn ensure_visible(mut self, layout: &ListLayout) -> Self {
        let Some(index) = self.selected else {
            return self;
        };
        let (Some(top), Some(height)) = (layout.entry_top(index), layout.entry_height(index))
        else {
            return self;
        };

        if top < self.offset {
            self.offset = top;
        } else if top + height > self.offset + self.height {
            let bottom_aligned = (top + height).saturating_sub(self.height);
            self.offset = bottom_aligned.min(top);
        }
        self.clamp(layout)
    }
}

/// Handle a scroll keyboard action.
///
/// Returns the viewport unchanged for non-scroll actions.
pub fn handle_scroll_action(
    viewport: ListViewport,
    action: KeyAction,
    layout: &ListLayout,
) -> ListViewport {
    if layout.is_empty() {
        return viewport;
    }
    let last = layout.len() - 1;
    // A page moves the selection by one viewport of collapsed rows
    let page = viewport.height.max(1);

    let selected = match (action, viewport.selected) {
        (KeyAction::ScrollUp, Some(index)) => index.saturating_sub(1),
        (KeyAction::ScrollDown, Some(index)) => (index + 1).min(last),
        (KeyAction::PageUp, Some(index)) => index.saturating_sub(page),
        (KeyAction::PageDown, Some(index)) => (index + page).min(last),
        (KeyAction::ScrollUp | KeyAction::PageUp, None) => 0,
        (KeyAction::ScrollDown | KeyAction::PageDown, None) => {
            first_visible(viewport, layout).unwrap_or(0)
        }
        (KeyAction::ScrollToTop, _) => 0,
        (KeyAction::ScrollToBottom, _) => last,
        _ => return viewport,
    };

    ListViewport {
        selected: Some(selected),
        ..viewport
    }
    .ensure_visible(layout)
}

/// Scroll the viewport by `delta` wheel notches (negative is up).
///
/// The selection is left alone even if it scrolls out of view.
pub fn handle_wheel(viewport: ListViewport, delta: i32, layout: &ListLayout) -> ListViewport {
    let rows = (delta.unsigned_abs() as usize).saturating_mul(WHEEL_STEP);
    let offset = if delta < 0 {
        viewport.offset.saturating_sub(rows)
    } else {
        viewport.offset.saturating_add(rows)
    };
    ListViewport { offset, ..viewport }.clamp(layout)
}

fn first_visible(viewport: ListViewport, layout: &ListLayout) -> Option<usize> {
    layout.entry_at_row(viewport.offset).map(|(index, _)| index)
}

// ===== Tests =====

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
