use std::io;

use crate::session::GameState;

/// Advisory conditions reported back to the player. None of them change
/// session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no game in progress ({0:?})")]
    NotPlaying(GameState),

    #[error("fill all slots before submitting")]
    Incomplete,

    #[error("slot {0} does not exist")]
    SlotOutOfRange(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("RON error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("max_attempts must be at least 1")]
    InvalidMaxAttempts,
}
