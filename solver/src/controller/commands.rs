use tokio::sync::{broadcast, oneshot};

use super::events::SolverEvent;
use super::snapshot::SolveSnapshot;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SolverError {
    #[error("Solver controller closed")]
    ControllerClosed,
}

/// Commands sent to the controller actor.
///
/// Solve, NewGame, Stop and SetEnabled are fire-and-forget: requesters get
/// no outcome back, results surface later through the store and the event
/// stream. Only the read commands embed a reply channel.
pub enum SolverCommand {
    Solve {
        fen: String,
    },
    NewGame,
    Stop,
    SetEnabled {
        enabled: bool,
    },
    GetSnapshot {
        reply: oneshot::Sender<SolveSnapshot>,
    },
    Subscribe {
        reply: oneshot::Sender<(SolveSnapshot, broadcast::Receiver<SolverEvent>)>,
    },
    Shutdown,
}
