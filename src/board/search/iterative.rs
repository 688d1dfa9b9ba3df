//! Iterative deepening driver.

use std::time::{Duration, Instant};

use crate::board::{Color, MAX_PLY};

use super::alphabeta::SearchContext;
use super::log::IterationInfo;
use super::{no_moves_score, SearchResult, MATE_THRESHOLD};

impl SearchContext<'_> {
    /// Deepen from 1 to the configured depth, or search the configured
    /// depth directly when deepening is off.
    ///
    /// The clock is only consulted between iterations; the first
    /// iteration always completes.
    pub(crate) fn iterative_deepening(&mut self, side: Color) -> SearchResult {
        let start = Instant::now();
        let deadline = (self.config.time_limit_ms > 0)
            .then(|| start + Duration::from_millis(self.config.time_limit_ms));
        let max_depth = self.config.max_depth.clamp(1, MAX_PLY as u32);
        let first_depth = if self.config.iterative_deepening {
            1
        } else {
            max_depth
        };

        let mut best = None;
        let mut completed = 0;
        for depth in first_depth..=max_depth {
            if depth > first_depth {
                if let Some(deadline) = deadline {
                    if Instant::now() >= deadline {
                        log::trace!("time budget spent before depth {depth}");
                        break;
                    }
                }
            }

            let Some((m, score)) = self.search_root(depth, side) else {
                break;
            };
            best = Some((m, score));
            completed = depth;

            IterationInfo {
                depth,
                score,
                nodes: self.stats.nodes,
                tt_hits: self.stats.tt_hits,
                time_ms: start.elapsed().as_millis() as u64,
                best_move: Some(m),
            }
            .log();

            if score.abs() >= MATE_THRESHOLD {
                break;
            }
        }

        self.stats.completed_depth = completed;
        self.stats.elapsed_ms = start.elapsed().as_millis() as u64;

        match best {
            Some((m, score)) => SearchResult {
                best_move: Some(m),
                score,
                depth: completed,
                stats: self.stats,
            },
            None => SearchResult {
                best_move: None,
                score: no_moves_score(&self.board, side, 0),
                depth: 0,
                stats: self.stats,
            },
        }
    }
}
