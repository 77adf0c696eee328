//! Result expand/collapse handler.
//!
//! At most one result is expanded. Expanding another collapses the first.

use crate::model::ImdbId;

/// Toggle `clicked` against the currently expanded id.
///
/// Returns `None` if `clicked` was expanded, otherwise `Some(clicked)`.
pub fn toggle_expanded(current: Option<ImdbId>, clicked: &ImdbId) -> Option<ImdbId> {
    match current {
        Some(expanded) if &expanded == clicked => None,
        _ => Some(clicked.clone()),
    }
}

// ===== Tests =====
