//! Configuration for the solver daemon
//!
//! Handles data directory configuration with the following precedence:
//! 1. CHESS_SOLVER_DATA_DIR environment variable
//! 2. ~/.config/chess-solver/data (production default)
//! 3. ./data (fallback for development)

use std::path::PathBuf;

const DEFAULT_CONFIG_DIR: &str = ".config/chess-solver/data";
const DEV_DATA_DIR: &str = "./data";

/// Get the data directory for the store and logs.
///
/// Priority:
/// 1. CHESS_SOLVER_DATA_DIR env variable if set
/// 2. $HOME/.config/chess-solver/data if HOME is set
/// 3. ./data as fallback
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHESS_SOLVER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(DEFAULT_CONFIG_DIR);
    }

    PathBuf::from(DEV_DATA_DIR)
}

/// Locate the engine binary.
///
/// Priority:
/// 1. CHESS_SOLVER_ENGINE env variable if set
/// 2. well-known stockfish install locations
/// 3. `stockfish`, resolved through PATH at spawn time
pub fn get_engine_path() -> PathBuf {
    if let Ok(path) = std::env::var("CHESS_SOLVER_ENGINE") {
        return PathBuf::from(path);
    }

    uci::find_engine_path().unwrap_or_else(|| PathBuf::from("stockfish"))
}
