use std::collections::VecDeque;

use uci::Score;

/// Mutable state of the solve pipeline.
///
/// Owned exclusively by the controller actor; nothing here is shared or
/// locked. Positions and moves are opaque strings, the session never
/// validates them.
#[derive(Debug)]
pub struct SolveSession {
    is_solving: bool,
    current_position: Option<String>,
    pending: VecDeque<String>,
    last_best_move: String,
    evaluation: Score,
}

impl Default for SolveSession {
    fn default() -> Self {
        Self {
            is_solving: false,
            current_position: None,
            pending: VecDeque::new(),
            last_best_move: String::new(),
            evaluation: Score::Centipawns(0),
        }
    }
}

impl SolveSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `fen` as the position under analysis. The evaluation resets to
    /// zero for the new position; the last best move is deliberately left
    /// alone so observers keep seeing the previous answer until a fresher
    /// one arrives.
    pub fn begin_analysis(&mut self, fen: String) {
        self.current_position = Some(fen);
        self.evaluation = Score::Centipawns(0);
        self.is_solving = true;
    }

    /// Mark the in-flight analysis finished and hand back the next queued
    /// position, if any. The caller decides whether to start it.
    pub fn complete_analysis(&mut self) -> Option<String> {
        self.is_solving = false;
        self.pending.pop_front()
    }

    /// Add a position to the back of the wait queue. No deduplication and
    /// no bound: requests are kept in arrival order, duplicates included.
    pub fn enqueue(&mut self, fen: String) {
        self.pending.push_back(fen);
    }

    /// Record the engine's current best move. Empty moves are ignored so a
    /// stale answer survives until a real one replaces it.
    pub fn record_best_move(&mut self, mv: &str) {
        if !mv.is_empty() {
            self.last_best_move = mv.to_string();
        }
    }

    pub fn set_evaluation(&mut self, score: Score) {
        self.evaluation = score;
    }

    pub fn is_solving(&self) -> bool {
        self.is_solving
    }

    pub fn current_position(&self) -> Option<&str> {
        self.current_position.as_deref()
    }

    pub fn last_best_move(&self) -> &str {
        &self.last_best_move
    }

    pub fn evaluation(&self) -> Score {
        self.evaluation
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
