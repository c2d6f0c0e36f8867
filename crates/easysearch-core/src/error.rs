use std::error::Error as StdError;

use thiserror::Error;

use crate::types::Method;

pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{method} {path} returned HTTP {status}")]
    Status {
        method: Method,
        path: String,
        status: u16,
        body: String,
    },

    #[error("{method} {path} could not be completed: {source}")]
    Network {
        method: Method,
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} is already destroyed or not up-to-date")]
    Destroyed(&'static str),
}

/// Coarse classification callers branch on.
///
/// `Transport` means the service rejected the request or was unreachable,
/// `Decode` means it answered with a body we could not interpret, and
/// `State` means a dead handle was used. `State` errors never touch the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Transport,
    Decode,
    State,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidConfig(_) => ErrorKind::Config,
            Error::Status { .. } | Error::Network { .. } => ErrorKind::Transport,
            Error::Decode(_) | Error::Json(_) => ErrorKind::Decode,
            Error::Destroyed(_) => ErrorKind::State,
        }
    }

    /// HTTP status of a rejected request, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
