use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;

use crate::{EngineCommand, EngineTransport};

const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to spawn engine: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("Failed to get engine stdin")]
    MissingStdin,
    #[error("Failed to get engine stdout")]
    MissingStdout,
    #[error("Engine closed before sending uciok")]
    HandshakeEof,
    #[error("Timeout waiting for engine to respond")]
    HandshakeTimeout,
    #[error("IO error during handshake: {0}")]
    Io(#[from] std::io::Error),
}

/// A spawned UCI engine child process.
///
/// Stdio is bridged to an [`EngineTransport`] by two tasks: one draining
/// the command channel into stdin, one pumping stdout lines into the line
/// channel.
pub struct EngineProcess {
    process: Child,
}

impl EngineProcess {
    /// Spawn the engine binary at `path` and run the `uci`/`uciok`
    /// handshake before handing out the transport.
    pub async fn spawn(path: &Path) -> Result<(Self, EngineTransport), TransportError> {
        tracing::info!("Spawning engine: {:?}", path);
        let mut process = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(TransportError::Spawn)?;

        let mut stdin = process.stdin.take().ok_or(TransportError::MissingStdin)?;
        let stdout = process.stdout.take().ok_or(TransportError::MissingStdout)?;
        let mut reader = BufReader::new(stdout);

        // The engine accepts no searches until it has answered uciok.
        tracing::trace!("UCI >> uci");
        stdin.write_all(b"uci\n").await?;
        stdin.flush().await?;
        wait_for_uciok(&mut reader).await?;
        tracing::debug!("Received uciok, engine ready");

        let (command_tx, mut command_rx) = mpsc::unbounded_channel::<EngineCommand>();
        let (line_tx, line_rx) = mpsc::unbounded_channel::<String>();

        // Stdin writer task
        tokio::spawn(async move {
            while let Some(command) = command_rx.recv().await {
                let text = command.to_string();
                tracing::trace!("UCI >> {}", text);
                if let Err(e) = stdin.write_all(format!("{}\n", text).as_bytes()).await {
                    tracing::error!("Failed to write to engine stdin: {}", e);
                    break;
                }
                if let Err(e) = stdin.flush().await {
                    tracing::error!("Failed to flush engine stdin: {}", e);
                    break;
                }
                if matches!(command, EngineCommand::Quit) {
                    break;
                }
            }
            tracing::debug!("Stdin writer task exiting");
        });

        // Stdout reader task
        tokio::spawn(async move {
            let mut line = String::new();
            loop {
                line.clear();
                match reader.read_line(&mut line).await {
                    Ok(0) => {
                        tracing::warn!("Engine stdout EOF - engine closed");
                        break;
                    }
                    Ok(_) => {
                        let trimmed = line.trim();
                        tracing::trace!("UCI << {}", trimmed);
                        if line_tx.send(trimmed.to_string()).is_err() {
                            // Receiver dropped, nobody is listening anymore.
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Error reading engine stdout: {}", e);
                        break;
                    }
                }
            }
            tracing::debug!("Stdout reader task exiting");
        });

        Ok((Self { process }, EngineTransport::new(command_tx, line_rx)))
    }

    /// Reap the child. The owner is expected to have sent
    /// [`EngineCommand::Quit`] through the transport first; an engine that
    /// ignores it is killed after a short grace period.
    pub async fn shutdown(mut self) {
        let _ = tokio::time::timeout(Duration::from_secs(1), self.process.wait()).await;
        let _ = self.process.kill().await;
    }
}

async fn wait_for_uciok<R>(reader: &mut R) -> Result<(), TransportError>
where
    R: AsyncBufRead + Unpin,
{
    let handshake = async {
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                return Err(TransportError::HandshakeEof);
            }
            let trimmed = line.trim();
            tracing::trace!("UCI << {}", trimmed);
            if trimmed == "uciok" {
                return Ok(());
            }
        }
    };

    match tokio::time::timeout(HANDSHAKE_TIMEOUT, handshake).await {
        Ok(result) => result,
        Err(_) => Err(TransportError::HandshakeTimeout),
    }
}

/// Find a UCI engine executable in common install locations
pub fn find_engine_path() -> Option<PathBuf> {
    let paths = [
        "/usr/local/bin/stockfish",
        "/usr/bin/stockfish",
        "/opt/homebrew/bin/stockfish",
        "/usr/games/stockfish",
    ];

    paths
        .iter()
        .map(Path::new)
        .find(|path| path.exists())
        .map(Path::to_path_buf)
}
