use serde_json::Value;
use tokio::sync::{broadcast, mpsc};

use uci::{parse_engine_line, EngineCommand, EngineEvent};

use crate::result::SolveResult;
use crate::store::{keys, SolverStore};

use super::commands::SolverCommand;
use super::events::SolverEvent;
use super::state::ControllerState;

/// The controller actor loop.
/// Owns all mutable state. Commands and engine lines are processed one at
/// a time, so at most one analysis is ever in flight.
pub(crate) async fn run_controller<S: SolverStore>(
    mut state: ControllerState<S>,
    mut cmd_rx: mpsc::Receiver<SolverCommand>,
    event_tx: broadcast::Sender<SolverEvent>,
) {
    tracing::info!("Solver controller started");

    loop {
        tokio::select! {
            biased;

            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(SolverCommand::Shutdown) | None => {
                        tracing::info!("Solver controller shutting down");
                        state.transport.send(EngineCommand::Quit);
                        break;
                    }
                    Some(cmd) => handle_command(&mut state, cmd, &event_tx),
                }
            }

            line = state.transport.recv_line(), if !state.engine_gone => {
                match line {
                    Some(line) => handle_engine_line(&mut state, &line, &event_tx),
                    None => {
                        // Stay up for reads; solve requests now go nowhere,
                        // same as an engine that never answers.
                        tracing::error!("Engine line channel closed");
                        state.engine_gone = true;
                    }
                }
            }
        }
    }

    tracing::info!("Solver controller exited");
}

fn handle_command<S: SolverStore>(
    state: &mut ControllerState<S>,
    cmd: SolverCommand,
    event_tx: &broadcast::Sender<SolverEvent>,
) {
    match cmd {
        SolverCommand::Solve { fen } => {
            if !state.options.enabled {
                tracing::debug!("Solver disabled, ignoring solve request");
                return;
            }
            if state.session.is_solving() {
                // Ask the engine to wind down; the queued position is
                // dispatched when the terminal bestmove arrives.
                state.transport.send(EngineCommand::Stop);
                state.session.enqueue(fen);
                tracing::debug!(
                    "Analysis in flight, queued position ({} pending)",
                    state.session.pending_count()
                );
            } else {
                start_analysis(state, fen, event_tx);
            }
        }
        SolverCommand::NewGame => {
            state.transport.send(EngineCommand::Stop);
            state.transport.send(EngineCommand::NewGame);
        }
        SolverCommand::Stop => {
            // Advisory only: isSolving flips when the engine acknowledges
            // with its terminal bestmove line.
            state.transport.send(EngineCommand::Stop);
            state.transport.send(EngineCommand::NewGame);
        }
        SolverCommand::SetEnabled { enabled } => {
            state.options.enabled = enabled;
            tracing::info!("Solver {}", if enabled { "enabled" } else { "disabled" });
            if !enabled {
                state.transport.send(EngineCommand::Stop);
            }
        }
        SolverCommand::GetSnapshot { reply } => {
            let _ = reply.send(state.snapshot());
        }
        SolverCommand::Subscribe { reply } => {
            let _ = reply.send((state.snapshot(), event_tx.subscribe()));
        }
        SolverCommand::Shutdown => unreachable!(),
    }
}

/// Begin analysing `fen`: session transition first, flag publication, then
/// the two-command dispatch to the engine.
fn start_analysis<S: SolverStore>(
    state: &mut ControllerState<S>,
    fen: String,
    event_tx: &broadcast::Sender<SolverEvent>,
) {
    tracing::info!("Starting analysis: {}", fen);
    state.session.begin_analysis(fen.clone());
    publish_solving(state, true, event_tx);
    state.transport.send(EngineCommand::Position { fen });
    state.transport.send(EngineCommand::Go {
        movetime_ms: state.options.max_solve_time,
        depth: state.options.max_depth,
    });
}

fn handle_engine_line<S: SolverStore>(
    state: &mut ControllerState<S>,
    line: &str,
    event_tx: &broadcast::Sender<SolverEvent>,
) {
    let mut depth = None;

    match parse_engine_line(line) {
        EngineEvent::BestMove { mv } => {
            tracing::info!("Received bestmove: {}", mv);
            let next = state.session.complete_analysis();
            state.session.record_best_move(&mv);
            publish_solving(state, false, event_tx);
            if let Some(fen) = next {
                start_analysis(state, fen, event_tx);
            }
        }
        EngineEvent::Progress(progress) => {
            if let Some(score) = progress.score {
                state.session.set_evaluation(score);
            }
            state.session.record_best_move(&progress.pv_move);
            depth = progress.depth;
        }
        EngineEvent::Unrecognized => {}
    }

    // Every line republishes the result, transition or not.
    publish_result(state, depth, event_tx);
}

fn publish_solving<S: SolverStore>(
    state: &mut ControllerState<S>,
    solving: bool,
    event_tx: &broadcast::Sender<SolverEvent>,
) {
    if let Err(e) = state.store.set(keys::IS_SOLVING, Value::Bool(solving)) {
        tracing::warn!("Failed to write solving flag: {}", e);
    }
    let _ = event_tx.send(SolverEvent::SolvingChanged(solving));
}

fn publish_result<S: SolverStore>(
    state: &mut ControllerState<S>,
    depth: Option<u32>,
    event_tx: &broadcast::Sender<SolverEvent>,
) {
    let result = SolveResult {
        best_move: state.session.last_best_move().to_string(),
        fen: state
            .session
            .current_position()
            .unwrap_or_default()
            .to_string(),
        evaluation: state.session.evaluation().into(),
        depth,
    };

    match serde_json::to_value(&result) {
        Ok(value) => {
            if let Err(e) = state.store.set(keys::SOLVER_RESULT, value) {
                tracing::warn!("Failed to write solver result: {}", e);
            }
        }
        Err(e) => tracing::warn!("Failed to encode solver result: {}", e),
    }

    let _ = event_tx.send(SolverEvent::Result(result));
}
