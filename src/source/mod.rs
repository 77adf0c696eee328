//! Search result source.
//!
//! Runs [`FetchRequest`]s off the UI thread and hands completions back to the
//! event loop, which polls them like any other input:
//! - `dispatch` spawns a worker per request (requests are rare and short)
//! - `poll` drains finished work without blocking
//!
//! Requests are never aborted. Matching a completion against the current
//! query is the state machine's job (see `AppState::apply_completion`).

use crate::model::{FetchCompletion, FetchError, FetchRequest};
use crate::omdb::MovieSearch;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Background executor for search requests.
pub struct FetchSource {
    searcher: Arc<dyn MovieSearch>,
    tx: Sender<FetchCompletion>,
    rx: Receiver<FetchCompletion>,
    /// Dispatched requests whose completion has not been taken yet.
    in_flight: usize,
}

impl FetchSource {
    /// Create a source backed by `searcher`.
    pub fn new(searcher: Arc<dyn MovieSearch>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            searcher,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Start `request` on a worker thread.
    ///
    /// If the worker cannot be spawned the failure is delivered as a transport
    /// completion, so the request still resolves.
    pub fn dispatch(&mut self, request: FetchRequest) {
        let tag = request.tag;
        let searcher = Arc::clone(&self.searcher);
        let tx = self.tx.clone();
        self.in_flight += 1;

        debug!(
            query = %request.query,
            page = %request.page(),
            generation = tag.generation,
            in_flight = self.in_flight,
            "dispatching search"
        );

        let spawned = thread::Builder::new()
            .name("reelfind-fetch".to_string())
            .spawn(move || {
                let result = searcher.search(&request.query, request.page());
                // Receiver gone means the app is shutting down
                let _ = tx.send(FetchCompletion { tag, result });
            });

        if let Err(e) = spawned {
            warn!(error = %e, "failed to spawn fetch worker");
            let _ = self.tx.send(FetchCompletion {
                tag,
                result: Err(FetchError::Transport(format!(
                    "failed to spawn fetch worker: {e}"
                ))),
            });
        }
    }

    /// Drain every completion that has arrived. Never blocks.
    pub fn poll(&mut self) -> Vec<FetchCompletion> {
        let completions: Vec<_> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(completions.len());
        completions
    }

    /// Block up to `timeout` for the next completion.
    pub fn wait(&mut self, timeout: Duration) -> Option<FetchCompletion> {
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(completion)
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Number of requests still running or not yet collected.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
