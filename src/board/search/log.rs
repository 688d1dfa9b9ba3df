use std::fmt;

use crate::board::Move;

use super::MATE_THRESHOLD;

/// Summary of one completed deepening iteration.
#[derive(Clone, Debug)]
pub struct IterationInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub tt_hits: u64,
    pub time_ms: u64,
    pub best_move: Option<Move>,
}

impl IterationInfo {
    /// Plies to mate from the root, if the score is a mate score.
    /// Positive when White mates.
    #[must_use]
    pub fn mate_in(&self) -> Option<i32> {
        (self.score.abs() >= MATE_THRESHOLD)
            .then(|| self.score.signum() * (super::MATE_SCORE - self.score.abs()))
    }

    pub(crate) fn log(&self) {
        log::debug!("{self}");
    }
}

impl fmt::Display for IterationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "depth {} score ", self.depth)?;
        match self.mate_in() {
            Some(plies) => write!(f, "mate {plies}")?,
            None => write!(f, "cp {}", self.score)?,
        }
        write!(
            f,
            " nodes {} tt_hits {} time {}ms",
            self.nodes, self.tt_hits, self.time_ms
        )?;
        if let Some(m) = self.best_move {
            write!(f, " best {m}")?;
        }
        Ok(())
    }
}
