use uci::Score;

/// Point-in-time view of the solve session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveSnapshot {
    pub is_solving: bool,
    pub current_position: Option<String>,
    pub last_best_move: String,
    pub evaluation: Score,
    pub pending_count: usize,
    pub enabled: bool,
}
