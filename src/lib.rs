//! Reelfind
//!
//! Terminal movie search over the OMDb API: debounced title search,
//! accumulated results with scroll-triggered pagination, and single-item
//! expand/collapse.
//!
//! Pure Core / Impure Shell: `state` and `view_state` are deterministic and
//! take time as an argument; `source`, `omdb` and `view` own threads,
//! sockets and the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod omdb;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
