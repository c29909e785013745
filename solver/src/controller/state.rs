use uci::EngineTransport;

use crate::options::SolverOptions;
use crate::session::SolveSession;

use super::snapshot::SolveSnapshot;

/// Everything the controller actor owns. Single writer, no locks.
pub(crate) struct ControllerState<S> {
    pub session: SolveSession,
    pub options: SolverOptions,
    pub transport: EngineTransport,
    pub store: S,
    /// Set once the engine's line channel closes; the engine select arm
    /// is disabled from then on.
    pub engine_gone: bool,
}

impl<S> ControllerState<S> {
    pub fn new(options: SolverOptions, transport: EngineTransport, store: S) -> Self {
        Self {
            session: SolveSession::new(),
            options,
            transport,
            store,
            engine_gone: false,
        }
    }

    pub fn snapshot(&self) -> SolveSnapshot {
        SolveSnapshot {
            is_solving: self.session.is_solving(),
            current_position: self.session.current_position().map(str::to_string),
            last_best_move: self.session.last_best_move().to_string(),
            evaluation: self.session.evaluation(),
            pending_count: self.session.pending_count(),
            enabled: self.options.enabled,
        }
    }
}
