use tokio::sync::{broadcast, mpsc, oneshot};

use crate::message::SolveMessage;

use super::commands::{SolverCommand, SolverError};
use super::events::SolverEvent;
use super::snapshot::SolveSnapshot;

/// Cheap, cloneable handle to the controller actor.
#[derive(Clone)]
pub struct SolverHandle {
    cmd_tx: mpsc::Sender<SolverCommand>,
}

impl SolverHandle {
    pub(crate) fn new(cmd_tx: mpsc::Sender<SolverCommand>) -> Self {
        Self { cmd_tx }
    }

    /// Ask for the best move in `fen`. Solved immediately when the engine
    /// is idle, queued behind the in-flight analysis otherwise. No outcome
    /// comes back; results surface through the store and the event stream.
    pub async fn request_solve(&self, fen: impl Into<String>) -> Result<(), SolverError> {
        self.send(SolverCommand::Solve { fen: fen.into() }).await
    }

    /// Reset the engine between games.
    pub async fn request_new_game(&self) -> Result<(), SolverError> {
        self.send(SolverCommand::NewGame).await
    }

    /// Halt the in-flight analysis.
    pub async fn request_stop(&self) -> Result<(), SolverError> {
        self.send(SolverCommand::Stop).await
    }

    /// Flip the policy gate. Disabling also halts the in-flight analysis.
    pub async fn set_enabled(&self, enabled: bool) -> Result<(), SolverError> {
        self.send(SolverCommand::SetEnabled { enabled }).await
    }

    /// Route an inbound collaborator message to the matching operation.
    pub async fn dispatch(&self, message: SolveMessage) -> Result<(), SolverError> {
        match message {
            SolveMessage::StartSolve { fen_string } => self.request_solve(fen_string).await,
            SolveMessage::NewGame => self.request_new_game().await,
            SolveMessage::StopSolve => self.request_stop().await,
        }
    }

    pub async fn get_snapshot(&self) -> Result<SolveSnapshot, SolverError> {
        let (tx, rx) = oneshot::channel();
        self.send(SolverCommand::GetSnapshot { reply: tx }).await?;
        rx.await.map_err(|_| SolverError::ControllerClosed)
    }

    pub async fn subscribe(
        &self,
    ) -> Result<(SolveSnapshot, broadcast::Receiver<SolverEvent>), SolverError> {
        let (tx, rx) = oneshot::channel();
        self.send(SolverCommand::Subscribe { reply: tx }).await?;
        rx.await.map_err(|_| SolverError::ControllerClosed)
    }

    pub async fn shutdown(&self) {
        let _ = self.cmd_tx.send(SolverCommand::Shutdown).await;
    }

    async fn send(&self, cmd: SolverCommand) -> Result<(), SolverError> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| SolverError::ControllerClosed)
    }
}
