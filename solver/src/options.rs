use serde::{de::DeserializeOwned, Serialize};

use crate::store::{keys, SolverStore, StoreError};

/// Standard starting position.
pub const DEFAULT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const DEFAULT_ENGINE_COLOR: &str = "#699642";
const DEFAULT_MAX_DEPTH: u32 = 25;
const DEFAULT_MAX_SOLVE_TIME_MS: u64 = 8000;

/// Tunables for the solve pipeline. Stored key by key so observers can
/// change one value without racing the others.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions {
    /// Policy gate: when false, solve requests are ignored outright.
    pub enabled: bool,
    /// Highlight color consumed by UI observers; the solver only seeds it.
    pub engine_color: String,
    /// Depth ceiling for the engine's go command.
    pub max_depth: u32,
    /// Time budget in milliseconds for the engine's go command.
    pub max_solve_time: u64,
    /// Position solved at startup, before any request arrives.
    pub default_fen: String,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            engine_color: DEFAULT_ENGINE_COLOR.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_solve_time: DEFAULT_MAX_SOLVE_TIME_MS,
            default_fen: DEFAULT_FEN.to_string(),
        }
    }
}

impl SolverOptions {
    /// Load options from the store, writing the default for every key that
    /// is missing. Keys already present are read back untouched, so user
    /// edits survive restarts.
    pub fn seed<S: SolverStore>(store: &S) -> Result<Self, StoreError> {
        let defaults = SolverOptions::default();
        Ok(SolverOptions {
            enabled: seed_key(store, keys::ENABLED, defaults.enabled)?,
            engine_color: seed_key(store, keys::ENGINE_COLOR, defaults.engine_color)?,
            max_depth: seed_key(store, keys::MAX_DEPTH, defaults.max_depth)?,
            max_solve_time: seed_key(store, keys::MAX_SOLVE_TIME, defaults.max_solve_time)?,
            default_fen: seed_key(store, keys::DEFAULT_FEN, defaults.default_fen)?,
        })
    }
}

fn seed_key<S, T>(store: &S, key: &str, default: T) -> Result<T, StoreError>
where
    S: SolverStore,
    T: Serialize + DeserializeOwned,
{
    match store.get(key)? {
        Some(value) => match serde_json::from_value(value) {
            Ok(stored) => Ok(stored),
            Err(e) => {
                tracing::warn!("Stored value for {} has unexpected shape: {}", key, e);
                Ok(default)
            }
        },
        None => {
            store.set(key, serde_json::to_value(&default)?)?;
            Ok(default)
        }
    }
}
