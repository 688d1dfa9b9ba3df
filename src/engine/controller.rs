//! Background search controller.

use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::board::{search, Board, Color, Move, SearchConfig, SearchResult};
use crate::sync::BusyFlag;

use super::EngineError;

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

const SEARCH_THREAD_NAME: &str = "search";

/// Runs one search at a time on a worker thread and reports the result
/// through a callback. The caller's board is copied, never shared.
pub struct AsyncEngine {
    config: SearchConfig,
    busy: BusyFlag,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AsyncEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl AsyncEngine {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        AsyncEngine {
            config,
            busy: BusyFlag::new(),
            worker: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Applies to requests made after this call
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Start a search for `color` and return immediately.
    ///
    /// `on_done` runs on the worker thread with the chosen move (`None`
    /// when there is no legal move). Fails with `EngineError::Busy` while
    /// a previous search is still running.
    pub fn request_best_move<F>(
        &self,
        board: &Board,
        color: Color,
        on_done: F,
    ) -> Result<(), EngineError>
    where
        F: FnOnce(Option<Move>) + Send + 'static,
    {
        self.request_search(board, color, move |result| on_done(result.best_move))
    }

    /// Like `request_best_move`, but hands back the full `SearchResult`.
    pub fn request_search<F>(
        &self,
        board: &Board,
        color: Color,
        on_done: F,
    ) -> Result<(), EngineError>
    where
        F: FnOnce(SearchResult) + Send + 'static,
    {
        let Some(guard) = self.busy.try_acquire() else {
            log::warn!("search requested for {color} while another search is running");
            return Err(EngineError::Busy);
        };

        let snapshot = board.clone();
        let config = self.config.clone();
        // Held until the handle is stored, so a request made from `on_done`
        // cannot be overwritten by this one
        let mut worker = self.worker.lock();
        let handle = thread::Builder::new()
            .name(SEARCH_THREAD_NAME.to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let result = search(&snapshot, color, &config);
                // Idle again before the callback, so it may queue the next search
                drop(guard);
                on_done(result);
            })
            .map_err(EngineError::Spawn)?;

        // A previous handle belongs to a finished search; dropping it detaches
        *worker = Some(handle);
        Ok(())
    }

    /// Block until the most recently started search, callback included,
    /// has finished. Returns immediately if nothing was started.
    pub fn wait(&self) {
        let handle = self.worker.lock().take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                log::warn!("search thread panicked");
            }
        }
    }
}
