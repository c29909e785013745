pub mod parser;
pub mod process;
pub mod transport;

pub use parser::parse_engine_line;
pub use process::{find_engine_path, EngineProcess, TransportError};
pub use transport::EngineTransport;

use std::fmt;

/// Commands sent to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Load a position by FEN. The solver tracks no move history, so the
    /// trailing `moves` keyword is always transmitted with an empty list.
    Position { fen: String },
    /// Start a search bounded by both a time budget and a depth ceiling.
    Go { movetime_ms: u64, depth: u32 },
    /// Ask the engine to wind down the in-flight search.
    Stop,
    /// Reset engine-internal state between games.
    NewGame,
    Quit,
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineCommand::Position { fen } => write!(f, "position fen {} moves", fen),
            EngineCommand::Go { movetime_ms, depth } => {
                write!(f, "go movetime {} depth {}", movetime_ms, depth)
            }
            EngineCommand::Stop => write!(f, "stop"),
            EngineCommand::NewGame => write!(f, "ucinewgame"),
            EngineCommand::Quit => write!(f, "quit"),
        }
    }
}

/// Events decoded from engine output lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Terminal answer for the in-flight search. `mv` is empty when the
    /// line carried no move token at all.
    BestMove { mv: String },
    /// Incremental `info` line from an ongoing search.
    Progress(SearchProgress),
    /// Anything else the engine printed (id lines, readyok, banners).
    Unrecognized,
}

/// Fields extracted from an `info` line. Only what the solver consumes is
/// kept; everything else on the line is skipped over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchProgress {
    /// First move of the principal variation, empty if the line had no pv.
    pub pv_move: String,
    pub depth: Option<u32>,
    pub score: Option<Score>,
}

/// Engine evaluation of the position being searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Centipawns(i32),
    Mate(i32), // Negative for being mated
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Score::Centipawns(cp) => write!(f, "{}", cp),
            Score::Mate(n) if n < 0 => write!(f, "-M{}", -n),
            Score::Mate(n) => write!(f, "M{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_command_keeps_moves_keyword() {
        let cmd = EngineCommand::Position {
            fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
        };
        assert_eq!(
            cmd.to_string(),
            "position fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 moves"
        );
    }

    #[test]
    fn test_go_command_format() {
        let cmd = EngineCommand::Go {
            movetime_ms: 8000,
            depth: 25,
        };
        assert_eq!(cmd.to_string(), "go movetime 8000 depth 25");
    }

    #[test]
    fn test_simple_command_formats() {
        assert_eq!(EngineCommand::Stop.to_string(), "stop");
        assert_eq!(EngineCommand::NewGame.to_string(), "ucinewgame");
        assert_eq!(EngineCommand::Quit.to_string(), "quit");
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::Centipawns(35).to_string(), "35");
        assert_eq!(Score::Centipawns(-120).to_string(), "-120");
        assert_eq!(Score::Mate(3).to_string(), "M3");
        assert_eq!(Score::Mate(-3).to_string(), "-M3");
    }
}
