pub mod actor;
pub mod commands;
pub mod events;
pub mod handle;
pub mod snapshot;
pub mod state;

use tokio::sync::{broadcast, mpsc};
use tracing::Instrument;

use uci::EngineTransport;

use crate::options::SolverOptions;
use crate::store::SolverStore;

use actor::run_controller;
pub use commands::SolverError;
pub use events::SolverEvent;
pub use handle::SolverHandle;
pub use snapshot::SolveSnapshot;
use state::ControllerState;

/// Spawn the solve controller actor and return a cloneable handle to it.
///
/// The controller takes ownership of the engine transport: it is the only
/// writer of engine commands and the only reader of engine lines, so
/// concurrent callers cannot interleave half-issued analyses.
pub fn spawn<S>(options: SolverOptions, transport: EngineTransport, store: S) -> SolverHandle
where
    S: SolverStore + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel(32);
    let (event_tx, _) = broadcast::channel(100);

    let state = ControllerState::new(options, transport, store);
    tokio::spawn(
        async move {
            run_controller(state, cmd_rx, event_tx).await;
        }
        .instrument(tracing::info_span!("solver")),
    );

    SolverHandle::new(cmd_tx)
}
