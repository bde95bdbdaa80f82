use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::validator::ValidationError;

/// Errors raised while building a [`World`](super::World). All of them are
/// fatal at start-up; none can occur once a game is running.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read world file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid world TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("room '{room}' has an exit in unknown direction '{direction}'")]
    UnknownDirection { room: String, direction: String },

    #[error("room '{room}' has more than one exit {direction}")]
    DuplicateExit { room: String, direction: String },

    #[error("room '{0}' is defined more than once")]
    DuplicateRoom(String),

    #[error("world failed validation with {} problem(s)", .0.len())]
    Invalid(Vec<ValidationError>),
}
