use tokio::sync::mpsc;

use crate::EngineCommand;

/// Two-way channel pair connecting the solver to a running engine.
///
/// Commands go out without blocking the caller; output lines come back in
/// arrival order. Both halves are plain channels, so tests can stand in
/// for the engine process by holding the opposite ends.
pub struct EngineTransport {
    command_tx: mpsc::UnboundedSender<EngineCommand>,
    line_rx: mpsc::UnboundedReceiver<String>,
}

impl EngineTransport {
    pub fn new(
        command_tx: mpsc::UnboundedSender<EngineCommand>,
        line_rx: mpsc::UnboundedReceiver<String>,
    ) -> Self {
        Self {
            command_tx,
            line_rx,
        }
    }

    /// Queue a command for the engine's stdin. If the engine side is gone
    /// the command is dropped; the line channel closing is how the caller
    /// finds out.
    pub fn send(&self, command: EngineCommand) {
        tracing::debug!("Queueing command: {:?}", command);
        if self.command_tx.send(command).is_err() {
            tracing::warn!("Engine command channel closed, dropping command");
        }
    }

    /// Next output line from the engine, `None` once its stdout closes.
    pub async fn recv_line(&mut self) -> Option<String> {
        self.line_rx.recv().await
    }
}
