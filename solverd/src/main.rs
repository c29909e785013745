mod config;

use tokio::io::AsyncBufReadExt;
use tokio::sync::broadcast;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use solver::{JsonFileStore, SolveMessage, SolverEvent, SolverOptions};
use uci::EngineProcess;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = config::get_data_dir();

    // Log to rolling files under the data dir; stdin carries the message
    // protocol, so the terminal only gets the stderr mirror.
    let log_dir = data_dir.join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "solverd");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting chess solver daemon");
    tracing::info!("Using data directory: {}", data_dir.display());

    let store = JsonFileStore::new(data_dir.join("state"));
    let options = SolverOptions::seed(&store)?;
    let default_fen = options.default_fen.clone();

    let engine_path = config::get_engine_path();
    tracing::info!("Using engine: {}", engine_path.display());
    let (process, transport) = EngineProcess::spawn(&engine_path).await?;

    let handle = solver::spawn(options, transport, store);

    // Mirror solver activity into the log.
    let (_, mut events) = handle.subscribe().await?;
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(SolverEvent::SolvingChanged(solving)) => {
                    tracing::info!("Solving: {}", solving);
                }
                Ok(SolverEvent::Result(result)) => {
                    tracing::debug!("Result: {:?}", result);
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Event logger lagged, skipped {} events", n);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    // Analyse the default position as soon as the engine is up.
    handle.request_solve(default_fen).await?;

    // One JSON message per stdin line until EOF.
    let stdin = tokio::io::stdin();
    let mut lines = tokio::io::BufReader::new(stdin).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<SolveMessage>(line) {
            Ok(message) => {
                if handle.dispatch(message).await.is_err() {
                    tracing::error!("Solver controller gone, exiting");
                    break;
                }
            }
            Err(e) => tracing::warn!("Ignoring malformed message: {}", e),
        }
    }

    tracing::info!("Input closed, shutting down");
    handle.shutdown().await;
    process.shutdown().await;

    Ok(())
}
