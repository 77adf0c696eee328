//! View-state layer - row layout and hit-testing of the result list.
//!
//! # Module Structure
//!
//! - `layout`: ListLayout - row span of every result given the expanded item
//! - `hit_test`: HitTestResult - which result row a screen coordinate lands on

pub mod layout;

pub use hit_test::{hit_test, HitTestResult};
pub use layout::{entry_height, ListLayout};
