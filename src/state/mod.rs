//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI. Time is
//! passed in as `Instant`, and fetches are returned as requests rather than
//! performed.

pub mod app_state;
pub mod debounce;
pub mod expand_handler;
pub mod results;
pub mod scroll_handler;
pub mod scroll_trigger;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, CompletionOutcome, Phase};
pub use debounce::Debouncer;
pub use expand_handler::toggle_expanded;
pub use results::ResultList;
pub use scroll_handler::{handle_scroll_action, handle_wheel, ListViewport, WHEEL_STEP};
pub use scroll_trigger::{ScrollMetrics, ScrollTrigger};
pub use search::{SearchInput, SearchQuery};
